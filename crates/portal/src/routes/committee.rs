//! Committee page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::models::directory::CommitteeMember;
use crate::routes::members::SearchQuery;
use crate::state::AppState;

/// A committee post with its member reference resolved for display.
#[derive(Debug, Clone)]
pub struct CommitteeRow {
    pub post: CommitteeMember,
    pub member_name: String,
}

/// Committee page template.
#[derive(Template, WebTemplate)]
#[template(path = "committee/index.html")]
pub struct CommitteeTemplate {
    pub ctx: PageContext,
    pub rows: Vec<CommitteeRow>,
    pub query: String,
}

/// Display the committee posts with member names resolved.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(search): Query<SearchQuery>,
) -> impl IntoResponse {
    let directory = state.directory();
    let rows = directory
        .committee(search.q.as_deref())
        .into_iter()
        .map(|post| CommitteeRow {
            member_name: directory.member_name(post.member_id),
            post,
        })
        .collect();

    CommitteeTemplate {
        ctx: PageContext::new(lang, Some(user), "/committee"),
        rows,
        query: search.q.unwrap_or_default(),
    }
}
