use crate::{errors::Result, role::OpenViduRole};

/// Role and metadata attached to a token request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenOptions {
    role: OpenViduRole,
    data: String,
}

impl TokenOptions {
    pub fn builder() -> TokenOptionsBuilder {
        TokenOptionsBuilder::new()
    }

    pub fn role(&self) -> OpenViduRole {
        self.role
    }

    /// Opaque payload forwarded to the server verbatim
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Builder for [`TokenOptions`]
///
/// An unset role builds as [`OpenViduRole::Publisher`], unset data as an empty string.
#[derive(Debug, Clone, Default)]
pub struct TokenOptionsBuilder {
    role: Option<OpenViduRole>,
    data: String,
}

impl TokenOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, role: OpenViduRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the role from its wire name, failing on anything outside the known roles
    pub fn role_name(self, role: &str) -> Result<Self> {
        Ok(self.role(role.parse()?))
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn build(self) -> TokenOptions {
        TokenOptions {
            role: self.role.unwrap_or_default(),
            data: self.data,
        }
    }
}
