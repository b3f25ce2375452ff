//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Dashboard
//! GET  /health                 - Health check
//!
//! # Directory
//! GET  /members                - Member directory (?q= search)
//! GET  /members/abroad         - Members living abroad (?q= search)
//! GET  /committee              - Committee posts (?q= search)
//! GET  /donors                 - Donation records (?q= search)
//! GET  /students               - Student achievements (?standard= filter)
//! GET  /gallery                - Photo gallery index (?year=, ?event=)
//!
//! # Notices
//! GET  /notifications          - Notice board
//! POST /notifications          - Create notice (super-admin only, mock)
//!
//! # Registration
//! GET  /registration           - Member registration wizard
//! POST /registration           - Submit registration (mock)
//!
//! # Auth
//! GET  /auth/login             - Login page (login + registration tabs)
//! POST /auth/login             - Login action
//! POST /auth/register          - Registration tab action (mock)
//! POST /auth/logout            - Logout action
//! POST /language               - Toggle English/Gujarati
//! ```

pub mod auth;
pub mod committee;
pub mod dashboard;
pub mod donors;
pub mod gallery;
pub mod members;
pub mod notifications;
pub mod registration;
pub mod students;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::{StatusCode, Uri},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{self, ActiveLanguage, OptionalAuth};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the member directory routes router.
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(members::index))
        .route("/abroad", get(members::abroad))
}

/// Create the notice board routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(notifications::index).post(notifications::create),
    )
}

/// Create all routes for the portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Directory pages
        .nest("/members", member_routes())
        .route("/committee", get(committee::index))
        .route("/donors", get(donors::index))
        .route("/students", get(students::index))
        .route("/gallery", get(gallery::index))
        // Notice board
        .nest("/notifications", notification_routes())
        // Member registration wizard
        .route(
            "/registration",
            get(registration::page).post(registration::submit),
        )
        // Auth routes
        .nest("/auth", auth_routes())
        // Language toggle
        .route("/language", post(auth::toggle_language))
}

/// Build the complete application: routes, static assets, sessions,
/// fallback.
///
/// Shared between `main` and the integration tests so both drive the same
/// middleware stack.
pub fn router(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/portal/static"))
        .fallback(not_found)
        .layer(session_layer)
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Bilingual 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

/// Fallback handler for unknown routes.
async fn not_found(
    ActiveLanguage(lang): ActiveLanguage,
    OptionalAuth(user): OptionalAuth,
    uri: Uri,
) -> (StatusCode, NotFoundTemplate) {
    let ctx = PageContext::new(lang, user, uri.path());
    (StatusCode::NOT_FOUND, NotFoundTemplate { ctx })
}
