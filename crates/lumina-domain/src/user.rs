//! User role enumeration.

use serde::{Deserialize, Serialize};

/// Coarse authorization role.
///
/// Upstream stores roles as free-form text. They are tightened to this
/// closed enum at the trust boundary: parsing is case-insensitive, and any
/// unknown string maps to no role (treated as a plain user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mentor,
    User,
}

impl Role {
    /// Parse a free-form role string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "mentor" => Some(Self::Mentor),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Mentor => "mentor",
            Self::User => "user",
        }
    }
}
