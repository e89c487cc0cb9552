// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is an animated personal portfolio built with the Iced GUI
//! framework.
//!
//! Two pieces carry the behavior:
//!
//! - [`motion`] derives a single "should reduce motion" flag from the
//!   desktop accessibility setting and the battery state, and broadcasts it
//!   to every animated view.
//! - [`ui::lazy_section`] defers building page sections until they scroll
//!   into view or a navigation fragment asks for them.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod motion;
pub mod navigation;
pub mod ui;

#[cfg(test)]
mod test_utils;
