//! reqwest-backed implementation of [`BooksApi`].

use std::time::Duration;

use async_trait::async_trait;
use libris_kernel::settings::ApiSettings;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Book, BookDraft};
use crate::BooksApi;

/// Books client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBooksApi {
    /// Build a client from settings.
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|err| ApiError::transport(settings.base_url.clone(), err))?;

        Ok(Self::new(client, &settings.base_url))
    }

    /// Wrap an existing client. The base URL loses any trailing slash.
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

fn expect_success(
    endpoint: &str,
    result: Result<reqwest::Response, reqwest::Error>,
) -> Result<reqwest::Response, ApiError> {
    let response = result.map_err(|err| ApiError::transport(endpoint, err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::status(endpoint, status));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::transport(endpoint, err))
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let endpoint = self.collection_url();
        tracing::debug!(target: "libris::api", %endpoint, "fetching collection");
        let response = expect_success(&endpoint, self.client.get(&endpoint).send().await)?;
        decode(&endpoint, response).await
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let endpoint = self.collection_url();
        tracing::debug!(target: "libris::api", %endpoint, "creating record");
        let response =
            expect_success(&endpoint, self.client.post(&endpoint).json(draft).send().await)?;
        decode(&endpoint, response).await
    }

    async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        let endpoint = self.record_url(id);
        tracing::debug!(target: "libris::api", %endpoint, "updating record");
        let response =
            expect_success(&endpoint, self.client.put(&endpoint).json(draft).send().await)?;
        decode(&endpoint, response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = self.record_url(id);
        tracing::debug!(target: "libris::api", %endpoint, "deleting record");
        expect_success(&endpoint, self.client.delete(&endpoint).send().await)?;
        Ok(())
    }
}
