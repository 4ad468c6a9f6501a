//! Login page and credential check.

use askama::Template;
use axum::response::{IntoResponse, Redirect};

use super::HtmlTemplate;
use crate::{cookies, latency};

/// Landing page linking to the SSO form.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Handler for GET /login
pub async fn login_page() -> HtmlTemplate<LoginTemplate> {
    HtmlTemplate(LoginTemplate)
}

/// Handler for POST /login
///
/// The body is never read: every submission is accepted after the simulated
/// credential check and receives the same pair of cookies.
pub async fn login_submit() -> impl IntoResponse {
    latency::simulate("/login", latency::CREDENTIAL_CHECK).await;

    tracing::debug!("Accepting login, handing out session cookies");
    (cookies::set_login_cookies(), Redirect::to("/app"))
}
