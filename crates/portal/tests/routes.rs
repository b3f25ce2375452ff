//! Integration tests for the portal router.
//!
//! Drives the full application - sessions, auth extractors, templates -
//! in process via `tower::ServiceExt::oneshot`, round-tripping the
//! session cookie by hand.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use parivar_portal::config::PortalConfig;
use parivar_portal::routes;
use parivar_portal::state::AppState;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn app() -> Router {
    routes::router(AppState::new(PortalConfig::default()))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn get_with_cookie(path: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

/// Log in with the given credentials and return the session cookie.
async fn login(app: &Router, phone: &str, password: &str) -> Option<String> {
    let body = format!(
        "phone={}&password={}",
        urlencode(phone),
        urlencode(password)
    );
    let response = app
        .clone()
        .oneshot(post_form("/auth/login", &body, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned);

    if location == "/" { cookie } else { None }
}

/// Minimal form-value encoding for the handful of characters the test
/// fixtures use.
fn urlencode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace(' ', "+")
        .replace('&', "%26")
}

#[tokio::test]
async fn health_check_is_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn unauthenticated_dashboard_redirects_to_login() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login"
    );
}

#[tokio::test]
async fn login_page_renders_both_tabs() {
    let response = app().oneshot(get("/auth/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Sign In"));
    assert!(html.contains("New Registration"));
    assert!(html.contains("Bhikadiya Parivar"));
}

#[tokio::test]
async fn seeded_super_admin_can_log_in_and_sees_dashboard() {
    let app = app();
    let cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Dashboard"));
    assert!(html.contains("Super Admin"));
    assert!(html.contains("Total Members"));
    // Super-admins get the notifications tab.
    assert!(html.contains("href=\"/notifications\" class=\"nav-link"));
}

#[tokio::test]
async fn wrong_password_and_unknown_phone_fail_the_same_way() {
    let app = app();

    for body in [
        "phone=%2B91+98765+43210&password=wrong",
        "phone=%2B91+00000+00000&password=123456",
    ] {
        let response = app
            .clone()
            .oneshot(post_form("/auth/login", body, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/login?error=credentials",
            "every login failure collapses into the same generic redirect"
        );
    }
}

#[tokio::test]
async fn admin_navigation_omits_notices() {
    let app = app();
    let cookie = login(&app, "+91 98765 43230", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("href=\"/members\" class=\"nav-link"));
    assert!(!html.contains("href=\"/notifications\" class=\"nav-link"));
}

#[tokio::test]
async fn member_navigation_has_registration_and_notices() {
    let app = app();
    let cookie = login(&app, "+1 408 555 0164", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("href=\"/registration\" class=\"nav-link"));
    assert!(html.contains("href=\"/notifications\" class=\"nav-link"));
    assert!(!html.contains("href=\"/members\" class=\"nav-link"));
}

#[tokio::test]
async fn member_directory_search_filters_rows() {
    let app = app();
    let cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/members?q=priya", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Priya Bhikadiya"));
    assert!(!html.contains("Ramesh Bhikadiya"));
}

#[tokio::test]
async fn donor_totals_render_with_indian_grouping() {
    let app = app();
    let cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/donors", &cookie))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("2,08,000"));
    assert!(html.contains("51,000"));
}

#[tokio::test]
async fn notice_creation_is_super_admin_only() {
    let app = app();
    let form = "title=Test&description=Testing&category=update";

    let member_cookie = login(&app, "+1 408 555 0164", "123456").await.unwrap();
    let response = app
        .clone()
        .oneshot(post_form("/notifications", form, Some(&member_cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin_cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();
    let response = app
        .clone()
        .oneshot(post_form("/notifications", form, Some(&admin_cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/notifications?success=created"
    );
}

#[tokio::test]
async fn registration_submission_is_acknowledged_and_discarded() {
    let state = AppState::new(PortalConfig::default());
    let app = routes::router(state.clone());
    let accounts_before = state.users().len();

    let cookie = login(&app, "+1 408 555 0164", "123456").await.unwrap();
    let response = app
        .clone()
        .oneshot(post_form(
            "/registration",
            "first_name=Nila&last_name=Bhikadiya&phone=%2B91+91234+56789",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/registration?success=submitted"
    );
    // No account was created from the submission.
    assert_eq!(state.users().len(), accounts_before);
}

#[tokio::test]
async fn language_toggle_switches_header_to_gujarati() {
    let app = app();
    let cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/language", "", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("ડેશબોર્ડ"), "navigation renders in Gujarati");
    assert!(html.contains("ભિકડિયા પરિવાર"), "brand renders in Gujarati");

    // Toggling again returns to English.
    app.clone()
        .oneshot(post_form("/language", "", Some(&cookie)))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("Family Management System"));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = app();
    let cookie = login(&app, "+91 98765 43210", "123456").await.unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/auth/logout", "", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login"
    );

    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/login"
    );
}

#[tokio::test]
async fn unknown_route_renders_bilingual_404() {
    let response = app().oneshot(get("/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_string(response).await;
    assert!(html.contains("404"));
}
