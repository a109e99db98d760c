#![allow(dead_code)]

use oy_client::{OyClient, OyConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

pub const API_KEY: &str = "test-api-key";
pub const USERNAME: &str = "test-partner";

/// Start a mock OY! server and a client pointed at it
pub async fn setup() -> (MockServer, OyClient) {
    let server = MockServer::start().await;
    let config = OyConfig::new(API_KEY, USERNAME, false).with_api_base_url(server.uri());
    let client = OyClient::new(config).unwrap();
    (server, client)
}

/// Mock matching method, path and the authentication headers
pub fn oy_mock(http_method: &str, endpoint: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .and(header("x-api-key", API_KEY))
        .and(header("x-oy-username", USERNAME))
        .and(header("accept", "application/json"))
}
