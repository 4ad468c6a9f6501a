//! Post-login application shell.

use askama::Template;

use super::HtmlTemplate;
use crate::latency;

#[derive(Template)]
#[template(path = "app.html")]
pub struct AppTemplate;

/// Handler for GET /app
///
/// Cookies are not checked; the shell renders for anyone after the delay.
pub async fn app_shell() -> HtmlTemplate<AppTemplate> {
    latency::simulate("/app", latency::APP_SHELL).await;

    HtmlTemplate(AppTemplate)
}
