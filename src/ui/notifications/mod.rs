// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived feedback for things that happen outside the page flow: a
//! rejected settings or content file, a sent contact form, a copied link.
//!
//! - Success and info toasts stay 3s, warnings 5s, errors until dismissed.
//! - At most three are visible; later ones queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
