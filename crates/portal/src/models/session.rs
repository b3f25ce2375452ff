//! Session-related types.
//!
//! Types stored in the session for authentication and language state.

use serde::{Deserialize, Serialize};

use parivar_core::{Phone, Role, UserId};

use crate::models::user::User;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account id in the user store.
    pub id: UserId,
    /// Phone number the account logged in with.
    pub phone: Phone,
    /// Optional given name.
    pub first_name: Option<String>,
    /// Optional surname.
    pub last_name: Option<String>,
    /// Permission level, fixed at login time.
    pub role: Role,
}

impl CurrentUser {
    /// "First Last", skipping absent parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_owned(),
            (None, None) => self.phone.to_string(),
        }
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone: user.phone,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

/// Session keys for portal state.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the active UI language.
    pub const LANGUAGE: &str = "language";
}
