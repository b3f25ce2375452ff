//! Portal roles with different permission levels.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognized role tag.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid role: {0}")]
pub struct RoleError(pub String);

/// Portal role controlling which navigation items and actions a session
/// may access.
///
/// Serialized with the kebab-case tags the rest of the system uses
/// (`"super-admin"`, `"admin"`, `"member"`). `Member` is the baseline
/// role assigned to accounts created without an explicit role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full access including notices and member administration.
    SuperAdmin,
    /// Access to member, gallery, and student management.
    Admin,
    /// Read-mostly access plus self-service registration.
    #[default]
    Member,
}

impl Role {
    /// The kebab-case tag for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Human-readable label shown in the header badge.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Member => "Member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super-admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(RoleError(other.to_owned())),
        }
    }
}
