//! Account domain type.

use chrono::{DateTime, Utc};

use parivar_core::{Phone, Role, UserId};

/// A login-capable account held by the [`crate::store::UserStore`].
///
/// Immutable after creation: the store has no update operation, and every
/// lookup returns a clone. The password is stored exactly as supplied;
/// login compares it byte for byte. That is a known weakness, kept
/// deliberately - see DESIGN.md.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned id, strictly increasing from 1.
    pub id: UserId,
    /// Phone number used as the login lookup key.
    pub phone: Phone,
    /// Login credential (plaintext, compared byte for byte).
    pub password: String,
    /// Permission level.
    pub role: Role,
    /// Optional given name.
    pub first_name: Option<String>,
    /// Optional surname.
    pub last_name: Option<String>,
    /// Only active accounts may authenticate.
    pub is_active: bool,
    /// When the account entered the store.
    pub created_at: DateTime<Utc>,
}

impl User {
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
