//! Notice board route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;

use parivar_core::{NoticeCategory, Role};

use crate::context::PageContext;
use crate::directory::relative_age;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::models::directory::Notice;
use crate::routes::auth::MessageQuery;
use crate::state::AppState;

/// A notice with its relative age resolved for display.
#[derive(Debug, Clone)]
pub struct NoticeRow {
    pub notice: Notice,
    pub age: String,
}

/// Create-notice form data.
#[derive(Debug, Deserialize)]
pub struct CreateNoticeForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_date: Option<String>,
}

/// Notice board page template.
#[derive(Template, WebTemplate)]
#[template(path = "notifications/index.html")]
pub struct NotificationsTemplate {
    pub ctx: PageContext,
    pub rows: Vec<NoticeRow>,
    pub success: Option<String>,
}

/// Display the notice board, newest first.
pub async fn index(
    State(state): State<AppState>,
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let now = Utc::now();
    let rows = state
        .directory()
        .notices()
        .into_iter()
        .map(|notice| NoticeRow {
            age: relative_age(notice.created_at, now),
            notice,
        })
        .collect();

    NotificationsTemplate {
        ctx: PageContext::new(lang, Some(user), "/notifications"),
        rows,
        success: query.success,
    }
}

/// Handle the create-notice form.
///
/// Only super-admins may create notices. The submission is acknowledged
/// and discarded like every other directory mutation in the portal.
pub async fn create(
    RequireAuth(user): RequireAuth,
    Form(form): Form<CreateNoticeForm>,
) -> crate::error::Result<Response> {
    if user.role != Role::SuperAdmin {
        return Err(AppError::Forbidden(
            "only super-admins can create notices".to_owned(),
        ));
    }

    let category = form
        .category
        .parse::<NoticeCategory>()
        .map_err(AppError::BadRequest)?;

    tracing::info!(
        title = %form.title,
        %category,
        target_date = form.target_date.as_deref().unwrap_or(""),
        "Notice submitted"
    );

    Ok(Redirect::to("/notifications?success=created").into_response())
}
