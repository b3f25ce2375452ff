//! Donor page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{Datelike, Utc};

use crate::context::PageContext;
use crate::directory::Directory;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::models::directory::Donor;
use crate::routes::members::SearchQuery;
use crate::state::AppState;

/// Donor page template.
#[derive(Template, WebTemplate)]
#[template(path = "donors/index.html")]
pub struct DonorsTemplate {
    pub ctx: PageContext,
    pub donors: Vec<Donor>,
    pub total_amount: i64,
    pub this_year_amount: i64,
    pub query: String,
}

/// Display the donation records with totals.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(search): Query<SearchQuery>,
) -> impl IntoResponse {
    let donors = state.directory().donors(search.q.as_deref());
    let total_amount = Directory::donations_total(&donors);
    let this_year_amount = Directory::donations_total_for_year(&donors, Utc::now().year());

    DonorsTemplate {
        ctx: PageContext::new(lang, Some(user), "/donors"),
        donors,
        total_amount,
        this_year_amount,
        query: search.q.unwrap_or_default(),
    }
}
