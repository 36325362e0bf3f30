// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo listing and the templated image endpoint.

use crate::config::{DEFAULT_IMAGE_ENDPOINT, DEFAULT_LIST_ENDPOINT};
use crate::error::FetchError;
use crate::gallery::PhotoRecord;

/// Thin wrapper around a shared `reqwest::Client` with the two endpoints.
///
/// The client is cheap to clone (connection pool is shared), which is how it
/// travels into the async tasks the update loop spawns.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    list_endpoint: String,
    image_endpoint: String,
}

impl Default for GalleryClient {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_ENDPOINT, DEFAULT_IMAGE_ENDPOINT)
    }
}

impl GalleryClient {
    #[must_use]
    pub fn new(list_endpoint: impl Into<String>, image_endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            list_endpoint: list_endpoint.into(),
            image_endpoint: image_endpoint.into(),
        }
    }

    /// Builds a derived image URL for a record id and a square crop size.
    ///
    /// The URL is computed on demand and never stored on the record.
    #[must_use]
    pub fn image_url(&self, id: &str, size: u32) -> String {
        format!("{}/id/{}/{}/{}", self.image_endpoint, id, size, size)
    }

    /// Fetches the full photo listing in server order.
    ///
    /// Non-success statuses and undecodable bodies are errors; the caller
    /// decides what to do with its current collection (it keeps it).
    pub async fn fetch_list(&self) -> Result<Vec<PhotoRecord>, FetchError> {
        let response = self.http.get(&self.list_endpoint).send().await?;
        let records = response
            .error_for_status()?
            .json::<Vec<PhotoRecord>>()
            .await?;
        Ok(records)
    }

    /// Fetches the raw bytes of a derived image (thumbnail or detail crop).
    pub async fn fetch_image(&self, id: &str, size: u32) -> Result<Vec<u8>, FetchError> {
        let url = self.image_url(id, size);
        let response = self.http.get(&url).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
