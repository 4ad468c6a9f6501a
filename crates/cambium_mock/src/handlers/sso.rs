use askama::Template;

use super::HtmlTemplate;

/// The SSO credential form.
#[derive(Template)]
#[template(path = "sso.html")]
pub struct SsoTemplate;

/// Handler for GET /cn-rtr/sso
pub async fn sso_page() -> HtmlTemplate<SsoTemplate> {
    HtmlTemplate(SsoTemplate)
}
