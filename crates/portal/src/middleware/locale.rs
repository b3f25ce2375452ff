//! Active-language extraction.
//!
//! The visitor's language choice lives in the session next to their
//! identity; a missing or unreadable value falls back to English.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use parivar_core::Language;

use crate::models::session_keys;

/// Extractor for the session's active language.
///
/// Never rejects: requests without a session (or with no stored choice)
/// render in English.
pub struct ActiveLanguage(pub Language);

impl<S> FromRequestParts<S> for ActiveLanguage
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let language = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Language>(session_keys::LANGUAGE)
                .await
                .ok()
                .flatten()
                .unwrap_or_default(),
            None => Language::default(),
        };

        Ok(Self(language))
    }
}

/// Helper to store the active language in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_language(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LANGUAGE, language).await
}
