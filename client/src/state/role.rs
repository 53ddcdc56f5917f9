//! Portal roles carried in profile metadata.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

/// Literal role value that unlocks admin-only views.
pub const ADMIN_ROLE: &str = "admin";
/// Role assumed when neither metadata nor the backend profile names one.
pub const DEFAULT_ROLE: &str = "user";

/// A visitor's portal role. Parsing is exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Moderator,
    Officer,
    User,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            ADMIN_ROLE => Self::Admin,
            "moderator" => Self::Moderator,
            "officer" => Self::Officer,
            DEFAULT_ROLE => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::Moderator => "moderator",
            Self::Officer => "officer",
            Self::User => DEFAULT_ROLE,
            Self::Other(raw) => raw,
        }
    }

    /// Landing path of the role's own portal, if it has one.
    #[must_use]
    pub fn dashboard_path(&self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("/admin/dashboard"),
            Self::Moderator => Some("/moderator"),
            Self::Officer => Some("/officer/dashboard"),
            Self::User => Some("/user/dashboard"),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
