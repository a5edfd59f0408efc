// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use iced_gallery::application::port::{
    ApiError, AssetUploader, GalleryApi, LocalAsset, PortFuture, UploadError,
};
use iced_gallery::domain::gallery::{ImageMetadataPayload, ImagePage};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// In-memory backend that records every created image.
#[derive(Clone)]
pub struct FakeGallery {
    pub created: Arc<Mutex<Vec<ImageMetadataPayload>>>,
    pub create_result: Result<(), ApiError>,
}

impl FakeGallery {
    pub fn accepting() -> Self {
        Self {
            created: Arc::default(),
            create_result: Ok(()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            created: Arc::default(),
            create_result: Err(error),
        }
    }

    pub fn created(&self) -> Vec<ImageMetadataPayload> {
        self.created.lock().expect("lock poisoned").clone()
    }
}

impl GalleryApi for FakeGallery {
    fn create_image(&self, payload: ImageMetadataPayload) -> PortFuture<Result<(), ApiError>> {
        self.created.lock().expect("lock poisoned").push(payload);
        let result = self.create_result.clone();
        Box::pin(async move { result })
    }

    fn list_images(&self, _after: Option<String>) -> PortFuture<Result<ImagePage, ApiError>> {
        Box::pin(async { Ok(ImagePage::default()) })
    }

    fn fetch_image(&self, _url: String) -> PortFuture<Result<Vec<u8>, ApiError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

/// Asset storage that answers with a fixed result.
pub struct FakeStorage {
    pub result: Result<String, UploadError>,
}

impl AssetUploader for FakeStorage {
    fn upload(&self, _asset: LocalAsset) -> PortFuture<Result<String, UploadError>> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

/// What the one-shot server received.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub head: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Serves exactly one HTTP request with `status_line` and `body`.
///
/// Returns the base URL to send the request to and a handle resolving to
/// the recorded request.
pub async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.expect("read");
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let length = content_length(&head);
        while buf.len() < header_end + length {
            let n = socket.read(&mut chunk).await.expect("read");
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }

        let mut request_line = head.split_whitespace();
        let method = request_line.next().unwrap_or_default().to_string();
        let target = request_line.next().unwrap_or_default().to_string();

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;

        RecordedRequest {
            method,
            target,
            body: buf[header_end..header_end + length].to_vec(),
            head,
        }
    });

    (format!("http://{addr}"), handle)
}

/// A client that never goes through a proxy, so loopback servers are reachable.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client")
}
