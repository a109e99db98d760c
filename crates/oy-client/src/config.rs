//! # OY! Configuration
//!
//! Credentials and environment selection for the OY! API.
//! Loaded from environment variables, a TOML file, or given explicitly.
//!
//! | Key             | Meaning                                   |
//! |-----------------|-------------------------------------------|
//! | `OY_API_KEY`    | Partner API key (`x-api-key`)             |
//! | `OY_USERNAME`   | Partner username (`x-oy-username`)        |
//! | `OY_PRODUCTION` | `true` for production, staging otherwise  |

use oy_core::{OyError, OyResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{de, Deserialize, Deserializer};
use std::env;
use std::fmt;
use std::path::Path;

/// Production API host
pub const PRODUCTION_BASE_URL: &str = "https://partner.oyindonesia.com/api";

/// Staging API host
pub const STAGING_BASE_URL: &str = "https://api-stg.oyindonesia.com/api";

/// OY! API configuration
#[derive(Clone, Deserialize)]
pub struct OyConfig {
    /// Partner API key
    #[serde(rename = "OY_API_KEY", alias = "api_key")]
    pub api_key: String,

    /// Partner username
    #[serde(rename = "OY_USERNAME", alias = "username")]
    pub username: String,

    /// Use the production host
    #[serde(
        rename = "OY_PRODUCTION",
        alias = "production",
        default,
        deserialize_with = "deserialize_flag"
    )]
    pub is_production: bool,

    /// Base URL override (for testing/mocking)
    #[serde(skip)]
    pub api_base_url: Option<String>,
}

impl OyConfig {
    /// Create config with explicit values
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        is_production: bool,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            username: username.into(),
            is_production,
            api_base_url: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `OY_API_KEY`
    /// - `OY_USERNAME`
    ///
    /// `OY_PRODUCTION` is optional and defaults to staging.
    pub fn from_env() -> OyResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file holding the same keys
    pub fn from_file(path: impl AsRef<Path>) -> OyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            OyError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> OyResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| OyError::Configuration(format!("Invalid OY! config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> OyResult<Self> {
        let api_key = lookup("OY_API_KEY")
            .ok_or_else(|| OyError::Configuration("OY_API_KEY not set".to_string()))?;

        let username = lookup("OY_USERNAME")
            .ok_or_else(|| OyError::Configuration("OY_USERNAME not set".to_string()))?;

        let is_production = match lookup("OY_PRODUCTION") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                OyError::Configuration(format!("OY_PRODUCTION must be a boolean, got {:?}", value))
            })?,
            None => false,
        };

        let config = Self::new(api_key, username, is_production);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> OyResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(OyError::Configuration("OY_API_KEY is empty".to_string()));
        }
        if self.username.trim().is_empty() {
            return Err(OyError::Configuration("OY_USERNAME is empty".to_string()));
        }
        Ok(())
    }

    /// Base URL for the configured environment
    pub fn base_url(&self) -> &str {
        match self.api_base_url {
            Some(ref url) => url.as_str(),
            None if self.is_production => PRODUCTION_BASE_URL,
            None => STAGING_BASE_URL,
        }
    }

    /// Headers sent with every request
    pub fn default_headers(&self) -> OyResult<HeaderMap> {
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            OyError::Configuration("OY_API_KEY contains invalid header characters".to_string())
        })?;
        api_key.set_sensitive(true);

        let username = HeaderValue::from_str(&self.username).map_err(|_| {
            OyError::Configuration("OY_USERNAME contains invalid header characters".to_string())
        })?;

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert("x-api-key", api_key);
        headers.insert("x-oy-username", username);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }
}

impl fmt::Debug for OyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OyConfig")
            .field("api_key", &"[redacted]")
            .field("username", &self.username)
            .field("is_production", &self.is_production)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// TOML counterpart of `parse_flag`: a boolean or any string it accepts
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(value) => parse_flag(&value).ok_or_else(|| {
            de::Error::custom(format!("OY_PRODUCTION must be a boolean, got {:?}", value))
        }),
    }
}
