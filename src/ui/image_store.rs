// SPDX-License-Identifier: MPL-2.0
//! Decoded images keyed by their remote URL.
//!
//! Gallery thumbnails and the viewer share one download per URL.

use iced::widget::image;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Slot {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct ImageStore {
    slots: HashMap<String, Slot>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as loading. Returns `true` when the caller should start
    /// a download, i.e. the URL is unknown or its last download failed.
    pub fn request(&mut self, url: &str) -> bool {
        match self.slots.get(url) {
            Some(Slot::Loading | Slot::Ready(_)) => false,
            Some(Slot::Failed) | None => {
                self.slots.insert(url.to_string(), Slot::Loading);
                true
            }
        }
    }

    /// Stores the downloaded bytes, or records the failure.
    pub fn finish(&mut self, url: &str, bytes: Option<Vec<u8>>) {
        let slot = match bytes {
            Some(bytes) => Slot::Ready(image::Handle::from_bytes(bytes)),
            None => Slot::Failed,
        };
        self.slots.insert(url.to_string(), slot);
    }

    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.slots.get(url) {
            Some(Slot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(Slot::Loading))
    }

    #[must_use]
    pub fn has_failed(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(Slot::Failed))
    }

    /// Returns whether any download is still running.
    #[must_use]
    pub fn any_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, Slot::Loading))
    }

    /// Forgets every URL not in `keep`.
    pub fn retain<'a>(&mut self, keep: impl IntoIterator<Item = &'a str>) {
        let keep: std::collections::HashSet<&str> = keep.into_iter().collect();
        self.slots.retain(|url, _| keep.contains(url.as_str()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://cdn/a.png";

    #[test]
    fn first_request_starts_a_download() {
        let mut store = ImageStore::new();
        assert!(store.request(URL));
        assert!(store.is_loading(URL));
        assert!(store.any_loading());
        assert!(!store.request(URL), "no duplicate download while loading");
    }

    #[test]
    fn ready_images_are_not_downloaded_again() {
        let mut store = ImageStore::new();
        store.request(URL);
        store.finish(URL, Some(vec![1, 2, 3]));
        assert!(store.handle(URL).is_some());
        assert!(!store.request(URL));
    }

    #[test]
    fn failed_downloads_can_be_retried() {
        let mut store = ImageStore::new();
        store.request(URL);
        store.finish(URL, None);
        assert!(store.has_failed(URL));
        assert!(store.handle(URL).is_none());
        assert!(store.request(URL));
    }

    #[test]
    fn retain_drops_unlisted_urls() {
        let mut store = ImageStore::new();
        store.request(URL);
        store.request("https://cdn/b.png");
        store.retain([URL]);
        assert_eq!(store.len(), 1);
        assert!(store.is_loading(URL));
    }
}
