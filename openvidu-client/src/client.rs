use async_trait::async_trait;
use reqwest::{
    header::{HeaderName, HeaderValue},
    Client,
};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    errors::{OpenViduError, Result},
    traits::{HttpClient, HttpRequest, HttpResponse},
};

/// User name the OpenVidu server expects in Basic auth
const OPENVIDU_USER: &str = "OPENVIDUAPP";

/// [`HttpClient`] backed by reqwest, authenticating with the server secret
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    config: ClientConfig,
    base_url: Url,
    http_client: Client,
}

impl ReqwestHttpClient {
    /// Create a new client for the configured server
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(OpenViduError::Http)?;

        Ok(Self {
            config,
            base_url,
            http_client,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            OpenViduError::Configuration(format!("Invalid endpoint path {}: {}", path, e))
        })
    }
}

/// Split a `"Name: Value"` header line on its first colon
///
/// Lines without a colon, or whose name or value is not valid in HTTP, yield `None`.
fn split_header(line: &str) -> Option<(HeaderName, HeaderValue)> {
    let (name, value) = line.split_once(':')?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).ok()?;
    let value = HeaderValue::from_str(value.trim()).ok()?;
    Some((name, value))
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.endpoint(&request.path)?;
        debug!("POST {}", url);

        let mut builder = self
            .http_client
            .post(url)
            .basic_auth(OPENVIDU_USER, Some(&self.config.secret));

        for line in &request.headers {
            match split_header(line) {
                Some((name, value)) => builder = builder.header(name, value),
                None => warn!("Skipping malformed header: {:?}", line),
            }
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content = response.text().await?;
        debug!("Response from {}: status {}", request.path, status);

        Ok(HttpResponse { status, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lines_split_on_first_colon() {
        let (name, value) = split_header("Content-Type: application/json").unwrap();
        assert_eq!(name, reqwest::header::CONTENT_TYPE);
        assert_eq!(value, "application/json");

        let (name, value) = split_header("X-Trace:a:b").unwrap();
        assert_eq!(name.as_str(), "x-trace");
        assert_eq!(value, "a:b");
    }

    #[test]
    fn invalid_header_lines_are_rejected() {
        assert!(split_header("no colon here").is_none());
        assert!(split_header(": orphan").is_none());
        assert!(split_header("Bad Name: v").is_none());
        assert!(split_header("X-Multi: first\nsecond").is_none());
    }

    #[test]
    fn endpoints_resolve_under_base_path() {
        let client =
            ReqwestHttpClient::new(ClientConfig::new("https://example.com/openvidu", "s")).unwrap();

        assert_eq!(
            client.endpoint("api/tokens").unwrap().as_str(),
            "https://example.com/openvidu/api/tokens"
        );
        assert_eq!(
            client.endpoint("/api/sessions").unwrap().as_str(),
            "https://example.com/openvidu/api/sessions"
        );
    }
}
