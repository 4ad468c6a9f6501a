use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::MockError;

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => MockError::from(err).into_response(),
        }
    }
}
