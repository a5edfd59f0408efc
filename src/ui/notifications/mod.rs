// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Outcomes of background work (uploads, submissions, link opening) are
//! reported as short-lived toasts in the bottom-right corner. At most three
//! are visible at once; the rest wait in a queue.
//!
//! ```ignore
//! use iced_gallery::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-upload-success")
//!     .with_title("notification-upload-success-title"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Notifier};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
