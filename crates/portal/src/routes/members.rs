//! Member directory route handlers.

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
use crate::models::directory::Member;
use crate::state::AppState;

/// Search query for the directory tables.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Member directory page template.
#[derive(Template, WebTemplate)]
#[template(path = "members/index.html")]
pub struct MembersTemplate {
    pub ctx: PageContext,
    pub members: Vec<Member>,
    pub total: usize,
    pub query: String,
}

/// Display the member directory with optional search.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(search): Query<SearchQuery>,
) -> impl IntoResponse {
    let members = state.directory().members(search.q.as_deref());

    MembersTemplate {
        ctx: PageContext::new(lang, Some(user), "/members"),
        members,
        total: state.directory().member_count(),
        query: search.q.unwrap_or_default(),
    }
}

/// Members abroad page template.
#[derive(Template, WebTemplate)]
#[template(path = "members/abroad.html")]
pub struct AbroadTemplate {
    pub ctx: PageContext,
    pub members: Vec<Member>,
    pub query: String,
}

/// Display members currently living abroad.
pub async fn abroad(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(search): Query<SearchQuery>,
) -> impl IntoResponse {
    let members = state.directory().abroad_members(search.q.as_deref());

    AbroadTemplate {
        ctx: PageContext::new(lang, Some(user), "/members"),
        members,
        query: search.q.unwrap_or_default(),
    }
}
