//! # Raw API Response
//!
//! OY! responses are handed back untouched. Provider-level failures (invalid
//! bank code, insufficient balance, ...) arrive as regular responses and are
//! left for the caller to inspect.

use oy_core::{OyError, OyResult};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Status, headers and body of an OY! response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> OyResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text (lossy UTF-8)
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> OyResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            OyError::Serialization(format!("Failed to parse OY! response: {}", e))
        })
    }

    /// Turn a non-2xx response into `OyError::Status`
    pub fn error_for_status(self) -> OyResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(OyError::Status {
            status: self.status.as_u16(),
            body: self.text().into_owned(),
        })
    }
}
