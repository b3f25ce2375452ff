//! Authentication route handlers.
//!
//! Handles login, logout, the mock registration tab, and the language
//! toggle.
//!
//! Login deliberately reports one generic failure for every cause -
//! unknown phone, wrong password, or inactive account - so the form never
//! reveals which part was wrong.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{
    ActiveLanguage, OptionalAuth, clear_current_user, set_current_user, set_language,
};
use crate::models::{CurrentUser, User, session_keys};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
}

/// Registration tab form data.
///
/// Everything is optional: the submission is acknowledged and discarded,
/// so partial input must not fail deserialization.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RegisterForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub spouse_name: Option<String>,
    pub marital_status: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub family_branch: Option<String>,
    pub occupation: Option<String>,
    pub employment_type: Option<String>,
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub business_category: Option<String>,
    pub business_description: Option<String>,
    pub business_address: Option<String>,
    pub business_city: Option<String>,
    pub business_state: Option<String>,
    pub business_pincode: Option<String>,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template (login + registration tabs).
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// Already-authenticated visitors are sent to the dashboard.
pub async fn login_page(
    ActiveLanguage(lang): ActiveLanguage,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        ctx: PageContext::new(lang, None, "/auth/login"),
        error: query.error,
        success: query.success,
    }
    .into_response()
}

/// Handle login form submission.
///
/// Looks the account up by phone, compares the password byte for byte,
/// and requires the active flag. Every failure collapses into the same
/// `error=credentials` redirect.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let Some(user) = authenticate(&state, &form.phone, &form.password) else {
        tracing::warn!("Login failed");
        return Redirect::to("/auth/login?error=credentials").into_response();
    };

    let current_user = CurrentUser::from(user);
    if let Err(e) = set_current_user(&session, &current_user).await {
        tracing::error!("Failed to set session: {}", e);
        return Redirect::to("/auth/login?error=session").into_response();
    }

    tracing::info!(user_id = %current_user.id, role = %current_user.role, "Login successful");
    Redirect::to("/").into_response()
}

/// Check a phone/password pair against the account store.
///
/// Returns the account only when it exists, the password matches exactly,
/// and the account is active. Callers must not distinguish the three
/// failure causes.
fn authenticate(state: &AppState, phone: &str, password: &str) -> Option<User> {
    state
        .users()
        .get_by_phone(phone)
        .filter(|user| user.is_active && user.password == password)
}

// =============================================================================
// Registration Tab Route
// =============================================================================

/// Handle the registration tab submission.
///
/// Submissions are acknowledged and discarded: the committee reviews
/// registrations offline, and no account is created here (accounts are
/// provisioned separately).
pub async fn register(Form(form): Form<RegisterForm>) -> Response {
    tracing::info!(
        phone = form.phone.as_deref().unwrap_or(""),
        family_branch = form.family_branch.as_deref().unwrap_or(""),
        "Registration submitted"
    );

    Redirect::to("/auth/login?success=registered").into_response()
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Destroys the whole session (identity and language choice).
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    // Also destroy the entire session
    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    Redirect::to("/auth/login").into_response()
}

// =============================================================================
// Language Toggle Route
// =============================================================================

/// Toggle the session language and return to the referring page.
pub async fn toggle_language(session: Session, headers: HeaderMap) -> Response {
    let current = session
        .get::<parivar_core::Language>(session_keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();

    if let Err(e) = set_language(&session, current.toggled()).await {
        tracing::error!("Failed to store language: {}", e);
    }

    let back = headers
        .get(axum::http::header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");

    Redirect::to(back).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::PortalConfig;
    use crate::store::NewUser;
    use parivar_core::Phone;

    use super::*;

    fn state() -> AppState {
        AppState::new(PortalConfig::default())
    }

    #[test]
    fn test_authenticate_accepts_seeded_account() {
        let state = state();
        let user = authenticate(&state, "+91 98765 43210", "123456").unwrap();
        assert_eq!(user.phone.as_str(), "+91 98765 43210");
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let state = state();
        assert!(authenticate(&state, "+91 98765 43210", "654321").is_none());
    }

    #[test]
    fn test_authenticate_rejects_unknown_phone() {
        let state = state();
        assert!(authenticate(&state, "+91 00000 00000", "123456").is_none());
    }

    #[test]
    fn test_authenticate_requires_exact_credential_bytes() {
        let state = state();
        // Trailing whitespace is a different credential.
        assert!(authenticate(&state, "+91 98765 43210", "123456 ").is_none());
    }

    #[test]
    fn test_duplicate_phone_authenticates_as_first_account() {
        let state = state();
        // A second account under an already-used phone with a different
        // password never authenticates: lookup resolves to the first.
        state.users().create(NewUser {
            phone: Phone::parse("+91 98765 43210").unwrap(),
            password: "other".to_owned(),
            role: None,
            first_name: None,
            last_name: None,
        });

        assert!(authenticate(&state, "+91 98765 43210", "other").is_none());
        assert!(authenticate(&state, "+91 98765 43210", "123456").is_some());
    }
}
