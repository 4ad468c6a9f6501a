//! Injected latency.
//!
//! The delays are the point of the mock: they give the system under test a
//! slow login to exercise its own loading-state and timeout handling.

use std::time::Duration;

/// Delay before `GET /` redirects to the login page.
pub const LANDING: Duration = Duration::from_secs(1);

/// Delay before `POST /login` hands out the session cookies.
pub const CREDENTIAL_CHECK: Duration = Duration::from_secs(3);

/// Delay before `GET /app` renders the application shell.
pub const APP_SHELL: Duration = Duration::from_secs(1);

/// Suspend the current request for `delay`.
///
/// Only the calling request waits; other requests keep being served.
pub async fn simulate(route: &'static str, delay: Duration) {
    tracing::debug!(route, ?delay, "Simulating latency");
    tokio::time::sleep(delay).await;
}
