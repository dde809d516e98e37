use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::role::OpenViduRole;

/// Response to `POST api/sessions`
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub id: String,
}

/// Request body of `POST api/tokens`
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub session: &'a str,
    pub role: OpenViduRole,
    pub data: &'a str,
}

/// Response to `POST api/tokens`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub id: String,
}

/// Error body returned alongside a non-200 status
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorResponse {
    /// The message as text; non-string values are rendered as JSON, `null` counts as absent
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// How media flows between participants of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaMode {
    Routed,
    Relayed,
}

/// Whether the server records the session on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingMode {
    Always,
    Manual,
}

/// Optional properties sent when a session is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_mode: Option<MediaMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_mode: Option<RecordingMode>,
}

impl SessionProperties {
    pub fn with_custom_session_id(mut self, id: impl Into<String>) -> Self {
        self.custom_session_id = Some(id.into());
        self
    }

    pub fn with_media_mode(mut self, mode: MediaMode) -> Self {
        self.media_mode = Some(mode);
        self
    }

    pub fn with_recording_mode(mut self, mode: RecordingMode) -> Self {
        self.recording_mode = Some(mode);
        self
    }

    /// True when no property is set; such a request is sent without a body
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
