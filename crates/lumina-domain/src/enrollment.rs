//! Enrollment status enumeration.

use serde::{Deserialize, Serialize};

/// Status of an enrollment record.
///
/// Content access is gated on `Active` exactly; every other status (and a
/// missing record) means "not enrolled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    /// Parse the stored status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "Completed" => Some(Self::Completed),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether this status grants content access.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
