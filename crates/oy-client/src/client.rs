//! # OY! Client
//!
//! Holds the configuration and the HTTP transport. Every endpoint method
//! builds exactly one request and returns the raw response; there are no
//! retries and no status-code interpretation.

use crate::config::OyConfig;
use crate::response::ApiResponse;
use oy_core::{OyError, OyResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, Url};
use std::time::Duration;
use tracing::{debug, error};

/// Async client for the OY! partner API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OyClient {
    config: OyConfig,
    client: Client,
    headers: HeaderMap,
}

impl OyClient {
    /// Create a client with its own HTTP transport (30 s timeout)
    pub fn new(config: OyConfig) -> OyResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Self::with_http_client(config, client)
    }

    /// Create a client on top of a transport owned by the host application
    pub fn with_http_client(config: OyConfig, client: Client) -> OyResult<Self> {
        let headers = config.default_headers()?;

        Ok(Self {
            config,
            client,
            headers,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> OyResult<Self> {
        let config = OyConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &OyConfig {
        &self.config
    }

    /// Production or staging host, or the configured override
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Headers attached to every request
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        self.client.request(method, url).headers(self.headers.clone())
    }

    /// Request for `{path}/{id}`.
    ///
    /// The id is percent-encoded as exactly one path segment, so `/`, `?` and
    /// `#` stay part of the id. `.` and `..` would be dropped by the URL
    /// parser and are rejected instead.
    pub(crate) fn request_with_id(
        &self,
        method: Method,
        path: &str,
        id: &str,
    ) -> OyResult<RequestBuilder> {
        if matches!(id, "" | "." | "..") {
            return Err(OyError::InvalidId(id.to_string()));
        }

        let mut url = Url::parse(&format!("{}{}", self.base_url(), path)).map_err(|e| {
            OyError::Configuration(format!("Invalid OY! base URL {}: {}", self.base_url(), e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                OyError::Configuration(format!("OY! base URL {} has no path", self.base_url()))
            })?
            .push(id);

        Ok(self.client.request(method, url).headers(self.headers.clone()))
    }

    pub(crate) async fn execute(&self, request: RequestBuilder) -> OyResult<ApiResponse> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!("OY! request: {} {}", method, url);

        let response = self.client.execute(request).await.map_err(|e| {
            error!("OY! transport error: {} {}: {}", method, url, e);
            e
        })?;

        let response = ApiResponse::from_reqwest(response).await?;
        debug!("OY! response: {} {} -> {}", method, url.path(), response.status);

        Ok(response)
    }
}
