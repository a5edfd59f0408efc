// SPDX-License-Identifier: MPL-2.0
//! Wire formats of the gallery backend and asset storage.
//!
//! Kept separate from the domain types so the domain stays free of serde.

use crate::domain::gallery::{GalleryImage, ImageMetadataPayload, ImagePage};
use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/images`.
#[derive(Debug, Serialize)]
pub(super) struct CreateImageBody<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a ImageMetadataPayload> for CreateImageBody<'a> {
    fn from(payload: &'a ImageMetadataPayload) -> Self {
        Self {
            url: payload.url(),
            title: payload.title(),
            description: payload.description(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub ts: i64,
}

/// JSON body of `GET /api/images`.
#[derive(Debug, Deserialize)]
pub(super) struct ImagePageBody {
    #[serde(default)]
    pub data: Vec<ImageRecord>,
    #[serde(default)]
    pub after: Option<String>,
}

impl From<ImagePageBody> for ImagePage {
    fn from(body: ImagePageBody) -> Self {
        ImagePage {
            data: body
                .data
                .into_iter()
                .map(|record| GalleryImage {
                    id: record.id,
                    title: record.title,
                    description: record.description,
                    url: record.url,
                    ts: record.ts,
                })
                .collect(),
            after: body.after.filter(|cursor| !cursor.is_empty()),
        }
    }
}

/// JSON body returned by the asset storage after an upload.
#[derive(Debug, Deserialize)]
pub(super) struct UploadResponseBody {
    #[serde(default)]
    pub data: Option<UploadedAsset>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UploadedAsset {
    #[serde(default)]
    pub url: Option<String>,
}

impl UploadResponseBody {
    /// Returns the uploaded asset URL, if the response carried a non-empty one.
    pub fn into_url(self) -> Option<String> {
        self.data
            .and_then(|asset| asset.url)
            .filter(|url| !url.is_empty())
    }
}
