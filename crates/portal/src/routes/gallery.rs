//! Gallery route handler.

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
use crate::models::directory::GalleryEvent;
use crate::state::AppState;

/// Gallery filter query.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub year: Option<String>,
    pub event: Option<String>,
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery/index.html")]
pub struct GalleryTemplate {
    pub ctx: PageContext,
    pub events: Vec<GalleryEvent>,
    pub years: Vec<String>,
    pub selected_year: String,
}

/// Display the photo gallery event cards.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(filter): Query<GalleryQuery>,
) -> impl IntoResponse {
    let year = filter
        .year
        .as_deref()
        .filter(|y| !y.is_empty() && *y != "all");
    let event = filter.event.as_deref().filter(|e| !e.is_empty());

    GalleryTemplate {
        ctx: PageContext::new(lang, Some(user), "/gallery"),
        events: state.directory().gallery(year, event),
        years: state.directory().gallery_years(),
        selected_year: year.unwrap_or("all").to_owned(),
    }
}
