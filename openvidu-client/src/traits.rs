use crate::errors::Result;
use async_trait::async_trait;

/// A POST request relative to the server's base URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// Endpoint path, e.g. `api/sessions`
    pub path: String,
    /// Extra headers as `"Name: Value"` lines, sent with this request only
    pub headers: Vec<String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Raw status and body of a server response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content: String,
}

impl HttpResponse {
    pub fn new(status: u16, content: impl Into<String>) -> Self {
        Self {
            status,
            content: content.into(),
        }
    }
}

/// Transport used by [`Session`](crate::Session) to reach the server
///
/// Implementations return any response the server produced, whatever its status;
/// only failures to get a response at all are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse>;
}
