//! Student achievements route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::models::directory::Student;
use crate::state::AppState;

/// Standard filter query.
#[derive(Debug, Deserialize)]
pub struct StandardQuery {
    pub standard: Option<String>,
}

/// Student achievements page template.
#[derive(Template, WebTemplate)]
#[template(path = "students/index.html")]
pub struct StudentsTemplate {
    pub ctx: PageContext,
    pub students: Vec<Student>,
    pub standards: Vec<String>,
    pub selected: String,
}

/// Display the student achievement cards, optionally for one standard.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(filter): Query<StandardQuery>,
) -> impl IntoResponse {
    let standard = filter
        .standard
        .as_deref()
        .filter(|s| !s.is_empty() && *s != "all");

    StudentsTemplate {
        ctx: PageContext::new(lang, Some(user), "/students"),
        students: state.directory().students(standard),
        standards: state.directory().standards(),
        selected: standard.unwrap_or("all").to_owned(),
    }
}
