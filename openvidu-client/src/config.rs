use crate::errors::{OpenViduError, Result};
use serde::Deserialize;
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "/etc/openvidu-client/config.toml";

/// Connection settings for an OpenVidu server
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://localhost:4443/")
    pub base_url: String,
    /// Server secret, sent as the password of the `OPENVIDUAPP` user
    pub secret: String,
    /// Timeout for HTTP requests (in seconds)
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Skip TLS certificate checks, for servers running a self-signed certificate
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("https://localhost:4443/", "MY_SECRET")
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            secret: secret.into(),
            request_timeout_secs: default_timeout(),
            accept_invalid_certs: false,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout_secs = timeout_secs;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Parsed base URL, always ending in `/` so endpoint paths join beneath it
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| {
            OpenViduError::Configuration(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(OpenViduError::Configuration(format!(
                "Unsupported URL scheme: {}",
                scheme
            ))),
        }
    }

    /// Load from the TOML file at `OPENVIDU_CONFIG_PATH`, then apply environment overrides
    pub fn load() -> Result<Self> {
        // 首先尝试从 TOML 配置文件加载
        let config_path =
            std::env::var("OPENVIDU_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let config = if std::path::Path::new(&config_path).exists() {
            let config_str = std::fs::read_to_string(&config_path).map_err(|e| {
                OpenViduError::Configuration(format!(
                    "Failed to read config file {}: {}",
                    config_path, e
                ))
            })?;
            Self::from_toml(&config_str)?
        } else {
            ClientConfig::default()
        };

        // 环境变量覆盖配置文件设置
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str::<ClientConfig>(source)
            .map_err(|e| OpenViduError::Configuration(format!("Failed to parse config file: {}", e)))
    }

    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = var("OPENVIDU_URL") {
            self.base_url = url;
        }
        if let Some(secret) = var("OPENVIDU_SECRET") {
            self.secret = secret;
        }
        if let Some(timeout) = var("OPENVIDU_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout
                .parse()
                .map_err(|e| OpenViduError::Configuration(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(accept) = var("OPENVIDU_ACCEPT_INVALID_CERTS") {
            self.accept_invalid_certs = accept == "true";
        }
        Ok(self)
    }
}
