//! Member registration wizard route handlers.
//!
//! The wizard collects personal, family, and business details in three
//! sections. Submission is acknowledged with a success notice and the
//! input is discarded; the committee provisions approved members offline.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};

use crate::context::PageContext;
use crate::filters;
use crate::middleware::{ActiveLanguage, RequireAuth};
use crate::routes::auth::{MessageQuery, RegisterForm};

/// Registration wizard page template.
#[derive(Template, WebTemplate)]
#[template(path = "registration/index.html")]
pub struct RegistrationTemplate {
    pub ctx: PageContext,
    pub success: Option<String>,
}

/// Display the registration wizard.
pub async fn page(
    ActiveLanguage(lang): ActiveLanguage,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    RegistrationTemplate {
        ctx: PageContext::new(lang, Some(user), "/registration"),
        success: query.success,
    }
}

/// Handle the wizard submission.
pub async fn submit(RequireAuth(_user): RequireAuth, Form(form): Form<RegisterForm>) -> Response {
    tracing::info!(
        phone = form.phone.as_deref().unwrap_or(""),
        family_branch = form.family_branch.as_deref().unwrap_or(""),
        "Member registration submitted"
    );

    Redirect::to("/registration?success=submitted").into_response()
}
