// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - The scrolling portfolio page and its sections
//! - [`lazy_section`] - Viewport-gated content loading
//! - [`animation`] - Enter transitions sampled per frame
//!
//! # Overlays and Chrome
//!
//! - [`navbar`] - Sticky header with hamburger menu and theme toggle
//! - [`chat`] - Floating chat widget
//! - [`scroll_to_top`] - Floating scroll-to-top button
//! - [`notifications`] - Toast notification system for user feedback
//! - [`contact_form`] - Contact form validation and view
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Viewport, scroll animation and visibility threshold
//! - [`image_loader`] - Asynchronous portrait and card images
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod animation;
pub mod chat;
pub mod contact_form;
pub mod design_tokens;
pub mod icons;
pub mod image_loader;
pub mod lazy_section;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod scroll_to_top;
pub mod state;
pub mod styles;
pub mod theming;
