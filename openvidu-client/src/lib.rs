//! Client for the OpenVidu session API
//!
//! This crate provides a small typed API to:
//! - Create a session on an OpenVidu server
//! - Issue participant tokens for that session with a role and opaque data
//! - Map server and transport failures into [`OpenViduError`]

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod role;
pub mod session;
pub mod token_options;
pub mod traits;

pub use client::ReqwestHttpClient;
pub use config::ClientConfig;
pub use errors::*;
pub use models::{MediaMode, RecordingMode, SessionProperties};
pub use role::OpenViduRole;
pub use session::Session;
pub use token_options::{TokenOptions, TokenOptionsBuilder};
pub use traits::*;
