// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for download results, backend failures and
//! configuration warnings.
//!
//! - Success/info toasts disappear after 3s, warnings after 5s, errors stay
//!   until dismissed.
//! - At most three toasts are visible; further ones are queued.
//! - Toasts are stacked in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
