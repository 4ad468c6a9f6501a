//! Landing route.

use axum::response::Redirect;

use crate::latency;

/// Handler for GET /
///
/// Simulates a slow landing page, then sends the client to the login page.
pub async fn root_redirect() -> Redirect {
    latency::simulate("/", latency::LANDING).await;

    Redirect::to("/login")
}
