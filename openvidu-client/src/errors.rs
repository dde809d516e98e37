use thiserror::Error;

/// Numeric failure categories reported by [`OpenViduError::code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    InvalidArgument = 400,
    SessionIdCannotBeCreated = 105,
    TokenCannotBeCreated = 106,
    Transport = 803,
    Generic = 999,
}

/// Errors that can occur when talking to an OpenVidu server
#[derive(Error, Debug)]
pub enum OpenViduError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response status code {status}")]
    InvalidStatus { status: u16 },

    #[error("Unable to generate a sessionId")]
    SessionIdCannotBeCreated(#[source] Box<OpenViduError>),

    #[error("Could not retrieve token")]
    TokenCannotBeCreated(#[source] Box<OpenViduError>),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OpenViduError {
    /// HTTP status for rejected requests, a fixed [`ErrorCode`] otherwise
    pub fn code(&self) -> i32 {
        match self {
            Self::ServerError { status, .. } | Self::InvalidStatus { status } => i32::from(*status),
            Self::SessionIdCannotBeCreated(_) => ErrorCode::SessionIdCannotBeCreated as i32,
            Self::TokenCannotBeCreated(_) => ErrorCode::TokenCannotBeCreated as i32,
            Self::Http(_) => ErrorCode::Transport as i32,
            Self::InvalidRole(_) => ErrorCode::InvalidArgument as i32,
            Self::Json(_) | Self::Configuration(_) => ErrorCode::Generic as i32,
        }
    }

    /// The lower-level error a session or token failure was raised from
    pub fn cause(&self) -> Option<&OpenViduError> {
        match self {
            Self::SessionIdCannotBeCreated(cause) | Self::TokenCannotBeCreated(cause) => {
                Some(cause.as_ref())
            }
            _ => None,
        }
    }
}

/// Result type for OpenVidu client operations
pub type Result<T> = std::result::Result<T, OpenViduError>;
