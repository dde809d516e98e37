use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::OpenViduError;

/// Permission level granted to the holder of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpenViduRole {
    /// Can only receive streams
    Subscriber,
    /// Can receive and publish streams
    #[default]
    Publisher,
    /// Publisher that can also force unpublish and disconnect others
    Moderator,
}

impl OpenViduRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subscriber => "SUBSCRIBER",
            Self::Publisher => "PUBLISHER",
            Self::Moderator => "MODERATOR",
        }
    }
}

impl fmt::Display for OpenViduRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenViduRole {
    type Err = OpenViduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUBSCRIBER" => Ok(Self::Subscriber),
            "PUBLISHER" => Ok(Self::Publisher),
            "MODERATOR" => Ok(Self::Moderator),
            _ => Err(OpenViduError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_wire_names_ignoring_case() {
        assert_eq!("PUBLISHER".parse::<OpenViduRole>().unwrap(), OpenViduRole::Publisher);
        assert_eq!("subscriber".parse::<OpenViduRole>().unwrap(), OpenViduRole::Subscriber);
        assert_eq!(" Moderator ".parse::<OpenViduRole>().unwrap(), OpenViduRole::Moderator);
    }

    #[test]
    fn rejects_unknown_roles() {
        assert_matches!(
            "ADMIN".parse::<OpenViduRole>(),
            Err(OpenViduError::InvalidRole(role)) if role == "ADMIN"
        );
    }

    #[test]
    fn display_matches_serialized_form() {
        for role in [OpenViduRole::Subscriber, OpenViduRole::Publisher, OpenViduRole::Moderator] {
            assert_eq!(serde_json::to_string(&role).unwrap(), format!("\"{}\"", role));
        }
        assert_eq!(OpenViduRole::default(), OpenViduRole::Publisher);
    }
}
