//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::models::directory::{DashboardStats, RecentActivity};
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub stats: DashboardStats,
    pub activity: Vec<RecentActivity>,
}

/// Display the dashboard: stat cards, recent activity, quick actions.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
) -> impl IntoResponse {
    DashboardTemplate {
        ctx: PageContext::new(lang, Some(user), "/"),
        stats: state.directory().stats(),
        activity: state.directory().recent_activity(),
    }
}
