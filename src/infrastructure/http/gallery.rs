// SPDX-License-Identifier: MPL-2.0
//! Gallery backend adapter.

use super::client::join_url;
use super::dto::{CreateImageBody, ImagePageBody};
use crate::application::port::{ApiError, GalleryApi, PortFuture};
use crate::config::IMAGES_ENDPOINT;
use crate::domain::gallery::{ImageMetadataPayload, ImagePage};

/// [`GalleryApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpGalleryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGalleryApi {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn images_url(&self) -> String {
        join_url(&self.base_url, IMAGES_ENDPOINT)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

impl GalleryApi for HttpGalleryApi {
    fn create_image(&self, payload: ImageMetadataPayload) -> PortFuture<Result<(), ApiError>> {
        let client = self.client.clone();
        let url = self.images_url();

        Box::pin(async move {
            log::debug!("POST {url}");
            let response = client
                .post(&url)
                .json(&CreateImageBody::from(&payload))
                .send()
                .await
                .map_err(transport)?;

            if let Err(err) = check_status(&response) {
                log::warn!("Image creation rejected: {err}");
                return Err(err);
            }

            // The body shape is not relied upon; read it only to finish the exchange.
            let body = response.bytes().await.map_err(transport)?;
            log::debug!("Image created ({} byte response)", body.len());
            Ok(())
        })
    }

    fn list_images(&self, after: Option<String>) -> PortFuture<Result<ImagePage, ApiError>> {
        let client = self.client.clone();
        let url = self.images_url();

        Box::pin(async move {
            log::debug!("GET {url} (after: {after:?})");
            let mut request = client.get(&url);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor)]);
            }

            let response = request.send().await.map_err(transport)?;
            check_status(&response)?;

            let body: ImagePageBody = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(ImagePage::from(body))
        })
    }

    fn fetch_image(&self, url: String) -> PortFuture<Result<Vec<u8>, ApiError>> {
        let client = self.client.clone();

        Box::pin(async move {
            log::debug!("GET {url}");
            let response = client.get(&url).send().await.map_err(transport)?;
            check_status(&response)?;
            let bytes = response.bytes().await.map_err(transport)?;
            Ok(bytes.to_vec())
        })
    }
}
