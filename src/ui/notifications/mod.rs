// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for non-blocking feedback: startup warnings (unreadable settings or
//! preferences) and acknowledgements such as toggling the retro skin.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - queue with at most three visible toasts
//! - [`toast`] - rendering in the bottom-right corner

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
