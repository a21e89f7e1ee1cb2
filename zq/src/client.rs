//! Async HTTP client for the ZincSearch API

use reqwest::{Client, StatusCode};

use crate::error::{Error, Result};
use crate::index::monthly_index_now;
use crate::query::SearchRequest;
use crate::record::BulkRecord;

/// A response as the server sent it: status plus the raw body.
///
/// The client does not treat non-2xx statuses as errors; the server's
/// error payloads are bodies like any other and the caller decides
/// what to do with them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Client for one ZincSearch instance
pub struct ZincClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ZincClient {
    /// Create a client for `base_url`, e.g. `http://localhost:4080`.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidBaseUrl(base_url));
        }
        let username = username.into();
        if username.contains(':') {
            return Err(Error::InvalidCredentials(
                "username must not contain ':'".to_string(),
            ));
        }
        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password: password.into(),
        })
    }

    /// Execute a search against `index` and return the raw response.
    ///
    /// Network failures surface as `Err`; the status code is handed
    /// back as-is otherwise.
    pub async fn search(&self, index: &str, request: &SearchRequest) -> Result<RawResponse> {
        let url = format!("{}/api/{}/_search", self.base_url, index);
        tracing::debug!(%url, "sending search request");

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(%status, bytes = body.len(), "search response received");
        Ok(RawResponse { status, body })
    }

    /// Send a batch of documents to `/api/_bulkv2`, stamping the
    /// record's index with the current year-month prefix.
    pub async fn bulk(&self, record: &BulkRecord) -> Result<RawResponse> {
        let stamped = BulkRecord {
            index: monthly_index_now(&record.index),
            records: record.records.clone(),
        };
        let url = format!("{}/api/_bulkv2", self.base_url);
        tracing::debug!(%url, index = %stamped.index, docs = stamped.records.len(), "sending bulk payload");

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&stamped)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, "bulk ingest returned non-success status");
        }
        Ok(RawResponse { status, body })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
