use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app_shell::app_shell,
    login::{login_page, login_submit},
    root::root_redirect,
    sso::sso_page,
};

/// Create the mock router.
///
/// Routes:
/// - `GET /` - slow redirect to `/login`
/// - `GET /login` - login landing page
/// - `POST /login` - slow credential check, sets the session cookies
/// - `GET /cn-rtr/sso` - SSO credential form
/// - `GET /app` - slow application shell
///
/// Anything else falls through to axum's default 404/405 responses.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/login", get(login_page).post(login_submit))
        .route("/cn-rtr/sso", get(sso_page))
        .route("/app", get(app_shell))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use tokio::time::Instant;
    use tower::ServiceExt;

    async fn send_get(uri: &str) -> Response<Body> {
        create_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn set_cookies(response: &Response<Body>) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_root_redirects_to_login_after_delay() {
        let start = Instant::now();
        let response = send_get("/").await;

        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_login_page() {
        let response = send_get("/login").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookies(&response).is_empty());

        let html = body_text(response).await;
        assert!(html.contains("Cambium Networks | Sign In"));
        assert!(html.contains(r#"href="/cn-rtr/sso""#));
    }

    #[tokio::test]
    async fn test_sso_page() {
        let response = send_get("/cn-rtr/sso").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let html = body_text(response).await;
        assert!(html.contains(r#"<form id="login" method="post" action="/login">"#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
        assert!(html.contains(r#"name="remember""#));
        assert!(html.contains(r#"<button type="submit">"#));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_submit_sets_cookies_and_redirects_to_app() {
        let start = Instant::now();
        let response = create_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from("email=dev%40example.com&password=hunter2&remember=on"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/app");

        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().any(|c| c.starts_with("sid=s:1234+y")));
        assert!(cookies
            .iter()
            .any(|c| c.starts_with("XSRF-TOKEN=asdfadfsadsf")));
        assert!(cookies.iter().all(|c| !c.contains("HttpOnly")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_submit_accepts_empty_body() {
        let response = create_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/app");
        assert_eq!(set_cookies(&response).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_submit_ignores_non_form_body() {
        let response = create_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(set_cookies(&response).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_app_shell_after_delay() {
        let start = Instant::now();
        let response = send_get("/app").await;

        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"<div id="app">"#));
        assert!(html.contains("cnMaestro"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_requests_are_idempotent() {
        for uri in ["/", "/login", "/cn-rtr/sso", "/app"] {
            let first = send_get(uri).await;
            let second = send_get(uri).await;

            assert_eq!(first.status(), second.status(), "{uri}");
            assert_eq!(
                first.headers().get(header::LOCATION),
                second.headers().get(header::LOCATION),
                "{uri}"
            );
            assert_eq!(body_text(first).await, body_text(second).await, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = send_get("/nonexistent").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let response = create_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
