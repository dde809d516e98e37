use serde::de::DeserializeOwned;
use std::fmt;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::{
    errors::{OpenViduError, Result},
    models::{ErrorResponse, SessionProperties, SessionResponse, TokenRequest, TokenResponse},
    token_options::TokenOptions,
    traits::{HttpClient, HttpRequest, HttpResponse},
};

const SESSION_URL: &str = "api/sessions";
const TOKEN_URL: &str = "api/tokens";

/// A session on the OpenVidu server, used to issue participant tokens
///
/// The session id is fetched at most once per `Session`; concurrent callers that
/// find it missing share a single request.
pub struct Session<C> {
    http_client: C,
    properties: SessionProperties,
    session_id: OnceCell<String>,
}

impl<C: HttpClient> Session<C> {
    /// Create a session on the server, failing if no id can be obtained
    pub async fn new(http_client: C) -> Result<Self> {
        Self::with_properties(http_client, SessionProperties::default()).await
    }

    /// Create a session on the server with the given properties
    pub async fn with_properties(http_client: C, properties: SessionProperties) -> Result<Self> {
        let session = Self::lazy_with_properties(http_client, properties);
        session.session_id().await?;
        Ok(session)
    }

    /// Build a session whose id is requested the first time it is needed
    ///
    /// Until then [`Display`](fmt::Display) prints an empty string; use
    /// [`session_id`](Self::session_id) to fetch the id.
    pub fn lazy(http_client: C) -> Self {
        Self::lazy_with_properties(http_client, SessionProperties::default())
    }

    fn lazy_with_properties(http_client: C, properties: SessionProperties) -> Self {
        Self {
            http_client,
            properties,
            session_id: OnceCell::new(),
        }
    }

    /// Attach to a session the server already knows about
    ///
    /// An empty id is treated as absent and fetched on first use.
    pub fn from_session_id(http_client: C, session_id: impl Into<String>) -> Self {
        let session_id = session_id.into();
        let cell = if session_id.is_empty() {
            OnceCell::new()
        } else {
            OnceCell::new_with(Some(session_id))
        };
        Self {
            http_client,
            properties: SessionProperties::default(),
            session_id: cell,
        }
    }

    /// The session id, requesting one from the server if none is cached
    pub async fn session_id(&self) -> Result<String> {
        self.session_id
            .get_or_try_init(|| self.retrieve_session_id())
            .await
            .cloned()
    }

    /// The session id if it has been obtained already
    pub fn cached_session_id(&self) -> Option<&str> {
        self.session_id.get().map(String::as_str)
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    async fn retrieve_session_id(&self) -> Result<String> {
        self.request_session_id().await.map_err(|e| {
            error!("Failed to create session: {}", e);
            OpenViduError::SessionIdCannotBeCreated(Box::new(e))
        })
    }

    async fn request_session_id(&self) -> Result<String> {
        let mut request = HttpRequest::new(SESSION_URL);
        if !self.properties.is_empty() {
            request = request
                .with_header("Content-Type: application/json")
                .with_body(serde_json::to_string(&self.properties)?);
        }

        let response = self.http_client.post(request).await?;
        let result: SessionResponse = parse_response(response)?;
        if result.id.is_empty() {
            return Err(OpenViduError::ServerError {
                status: 200,
                message: "Server returned an empty session id".to_string(),
            });
        }

        info!("Created OpenVidu session {}", result.id);
        Ok(result.id)
    }

    /// Issue a token for this session; `None` asks for a publisher with no data
    pub async fn generate_token(&self, token_options: Option<TokenOptions>) -> Result<String> {
        let token_options = token_options.unwrap_or_default();
        self.request_token(&token_options).await.map_err(|e| {
            error!("Failed to generate token: {}", e);
            OpenViduError::TokenCannotBeCreated(Box::new(e))
        })
    }

    async fn request_token(&self, token_options: &TokenOptions) -> Result<String> {
        let session_id = self.session_id().await?;
        let body = serde_json::to_string(&TokenRequest {
            session: &session_id,
            role: token_options.role(),
            data: token_options.data(),
        })?;
        debug!("Requesting {} token for session {}", token_options.role(), session_id);

        let request = HttpRequest::new(TOKEN_URL)
            .with_header("Content-Type: application/json")
            .with_body(body);
        let response = self.http_client.post(request).await?;
        let result: TokenResponse = parse_response(response)?;

        info!("Generated token for session {}", session_id);
        Ok(result.id)
    }
}

/// Prints the cached session id
///
/// Formatting cannot reach the server, so a [`lazy`](Session::lazy) session that has not
/// fetched its id yet prints an empty string.
impl<C> fmt::Display for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.session_id.get().map(String::as_str).unwrap_or_default())
    }
}

impl<C> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id.get())
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

/// Decode a 200 body into `T`, or turn any other status into an error
fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let status = response.status;
    if status != 200 {
        // Try to parse as ErrorResponse
        if let Some(message) = serde_json::from_str::<ErrorResponse>(&response.content)
            .ok()
            .and_then(|body| body.message_text())
        {
            return Err(OpenViduError::ServerError { status, message });
        }
        return Err(OpenViduError::InvalidStatus { status });
    }
    Ok(serde_json::from_str(&response.content)?)
}
