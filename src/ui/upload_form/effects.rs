// SPDX-License-Identifier: MPL-2.0
//! Side effects of a completed submission.

use super::messages::Event;
use crate::application::port::ApiError;
use crate::application::query::CacheInvalidator;
use crate::domain::gallery::QueryKey;
use crate::ui::notifications::{Notification, Notifier};

/// Reports the outcome of `POST /api/images`.
///
/// Success refreshes the image list once and shows a success toast. Any
/// failure shows one generic error toast and leaves the cache alone. Both
/// close the form.
pub fn apply_completion(
    outcome: &Result<(), ApiError>,
    cache: &mut dyn CacheInvalidator,
    notifier: &mut dyn Notifier,
) -> Event {
    match outcome {
        Ok(()) => {
            cache.invalidate(&QueryKey::IMAGES);
            notifier.notify(
                Notification::success("notification-upload-success")
                    .with_title("notification-upload-success-title"),
            );
        }
        Err(err) => {
            log::warn!("Image submission failed: {err}");
            notifier.notify(Notification::error("notification-upload-error"));
        }
    }
    Event::Close
}
