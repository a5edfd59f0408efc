// SPDX-License-Identifier: MPL-2.0
//! Core gallery types.

use std::fmt;

// =============================================================================
// ImageMetadataPayload
// =============================================================================

/// Body sent to the backend to create an image record.
///
/// `url` is the durable address returned by the asset uploader. A payload is
/// only ever built once that address is known, so `url` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadataPayload {
    url: String,
    title: String,
    description: String,
}

impl ImageMetadataPayload {
    /// Builds a payload, returning `None` when the remote URL is missing.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url,
            title: title.into(),
            description: description.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

// =============================================================================
// GalleryImage
// =============================================================================

/// An image record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Creation time in microseconds since the Unix epoch.
    pub ts: i64,
}

/// One page of the gallery listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePage {
    pub data: Vec<GalleryImage>,
    /// Cursor for the next page, `None` on the last page.
    pub after: Option<String>,
}

impl ImagePage {
    /// Returns whether more pages can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.after.is_some()
    }

    /// Appends the next page, taking over its cursor.
    #[must_use]
    pub fn followed_by(mut self, next: ImagePage) -> Self {
        self.data.extend(next.data);
        self.after = next.after;
        self
    }
}

// =============================================================================
// QueryKey
// =============================================================================

/// Logical key for a cached query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    /// Key of the gallery listing.
    pub const IMAGES: QueryKey = QueryKey("images");

    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_a_remote_url() {
        assert!(ImageMetadataPayload::new("", "Sunset", "A nice sunset").is_none());
    }

    #[test]
    fn payload_keeps_all_fields() {
        let payload = ImageMetadataPayload::new("https://cdn/x.png", "Sunset", "A nice sunset")
            .expect("url is present");
        assert_eq!(payload.url(), "https://cdn/x.png");
        assert_eq!(payload.title(), "Sunset");
        assert_eq!(payload.description(), "A nice sunset");
    }

    #[test]
    fn images_key_is_named_images() {
        assert_eq!(QueryKey::IMAGES.as_str(), "images");
        assert_eq!(QueryKey::IMAGES.to_string(), "images");
    }

    #[test]
    fn page_has_more_follows_cursor() {
        let mut page = ImagePage::default();
        assert!(!page.has_more());
        page.after = Some("cursor".into());
        assert!(page.has_more());
    }

    fn image(id: &str) -> GalleryImage {
        GalleryImage {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            url: format!("https://cdn/{id}.png"),
            ts: 0,
        }
    }

    #[test]
    fn followed_by_appends_and_moves_cursor() {
        let first = ImagePage {
            data: vec![image("a")],
            after: Some("c1".into()),
        };
        let second = ImagePage {
            data: vec![image("b")],
            after: None,
        };

        let merged = first.followed_by(second);
        let ids: Vec<_> = merged.data.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!merged.has_more());
    }
}
