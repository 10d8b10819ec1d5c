//! HTTP client for the Notion API.
//!
//! Bearer-token authenticated, versioned via the `Notion-Version` header.
//! Requests carry an explicit timeout; a non-success status is surfaced as
//! [`SyncError::Api`] with the response body as the message.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{BlockChildrenResponse, Database, QueryRequest, QueryResponse};
use super::{ContentApi, QueryTarget};
use crate::config::Config;
use crate::error::{Result, SyncError};

/// Notion API client
pub struct NotionClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotionClient {
    /// Create a client from the resolved configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| SyncError::Configuration("token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            "Notion-Version",
            HeaderValue::from_str(&config.api_version).map_err(|_| {
                SyncError::Configuration("API version contains invalid characters".into())
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentApi for NotionClient {
    async fn retrieve_database(&self, database_id: &str) -> Result<Database> {
        self.get_json(&format!("databases/{database_id}")).await
    }

    async fn query(&self, target: &QueryTarget, request: &QueryRequest) -> Result<QueryResponse> {
        let path = match target {
            QueryTarget::Database(id) => format!("databases/{id}/query"),
            QueryTarget::DataSource(id) => format!("data_sources/{id}/query"),
        };
        self.post_json(&path, request).await
    }

    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<BlockChildrenResponse> {
        // Cursors are opaque; let reqwest percent-encode them
        let mut request = self
            .client
            .get(self.url(&format!("blocks/{block_id}/children")))
            .query(&[("page_size", "100")]);
        if let Some(cursor) = start_cursor {
            request = request.query(&[("start_cursor", cursor)]);
        }
        Self::decode(request.send().await?).await
    }
}
