// SPDX-License-Identifier: MPL-2.0
//! Asset storage adapter.
//!
//! Uploads use a multipart form with a single `image` part; the optional API
//! key travels as the `key` query parameter. The storage answers with
//! `{ "data": { "url": ... } }`.

use super::dto::UploadResponseBody;
use crate::application::port::{AssetUploader, LocalAsset, PortFuture, UploadError};
use reqwest::multipart::{Form, Part};

/// [`AssetUploader`] over HTTP multipart.
#[derive(Debug, Clone)]
pub struct HttpAssetUploader {
    client: reqwest::Client,
    upload_url: String,
    api_key: Option<String>,
}

impl HttpAssetUploader {
    #[must_use]
    pub fn new(client: reqwest::Client, upload_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
            api_key,
        }
    }
}

fn build_form(asset: &LocalAsset) -> Result<Form, UploadError> {
    let part = Part::bytes(asset.bytes.to_vec())
        .file_name(asset.file_name.clone())
        .mime_str(&asset.mime_type)
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    Ok(Form::new().part("image", part))
}

impl AssetUploader for HttpAssetUploader {
    fn upload(&self, asset: LocalAsset) -> PortFuture<Result<String, UploadError>> {
        let client = self.client.clone();
        let upload_url = self.upload_url.clone();
        let api_key = self.api_key.clone();

        Box::pin(async move {
            if upload_url.trim().is_empty() {
                return Err(UploadError::NotConfigured);
            }

            log::debug!("Uploading {asset:?} to {upload_url}");
            let form = build_form(&asset)?;
            let mut request = client.post(&upload_url).multipart(form);
            if let Some(key) = &api_key {
                request = request.query(&[("key", key)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| UploadError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                log::warn!("Asset upload rejected with HTTP {status}");
                return Err(UploadError::Status(status.as_u16()));
            }

            let body: UploadResponseBody = response
                .json()
                .await
                .map_err(|e| UploadError::Decode(e.to_string()))?;
            body.into_url().ok_or(UploadError::MissingUrl)
        })
    }
}
