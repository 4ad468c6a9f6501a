//! Scripted walk through the Cambium login flow.
//!
//! Performs the same steps a browser-driven client takes against the real
//! service (open the instance, follow the SSO link, submit the credential
//! form) and reports the session cookies it was handed.
//!
//! Unlike a browser, the probe does not parse the form: credentials are
//! always posted to `/login`, the action the Cambium SSO form uses.

mod error;

use std::time::Duration;

use axum_extra::extract::cookie::Cookie;
use reqwest::{header, redirect::Policy, Client, Response, StatusCode};
use url::Url;

use crate::cookies::{SESSION_COOKIE, XSRF_COOKIE};

pub use error::{ProbeError, Result};

/// Link on the landing page that leads to the SSO form.
const SSO_LINK: &str = r#"href="/cn-rtr/sso""#;
/// The SSO credential form.
const LOGIN_FORM: &str = r#"id="login""#;

/// Session cookies harvested from a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    pub session_id: String,
    pub xsrf_token: String,
}

impl AuthInfo {
    /// Render as a `Cookie` request header value.
    pub fn cookie_header(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; {XSRF_COOKIE}={}",
            self.session_id, self.xsrf_token
        )
    }
}

/// Client that walks the login flow of a Cambium instance.
#[derive(Debug, Clone)]
pub struct LoginProbe {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl LoginProbe {
    /// Create a probe for the instance at `base_url`.
    ///
    /// `timeout` bounds the whole walk, injected delays included.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Log in with `username` and `password` and return the session cookies.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthInfo> {
        tokio::time::timeout(self.timeout, self.walk(username, password))
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))?
    }

    async fn walk(&self, username: &str, password: &str) -> Result<AuthInfo> {
        tracing::info!(url = %self.base_url, "Opening instance");
        let response = self.client.get(self.base_url.clone()).send().await?;
        let landing = redirect_target(&self.base_url, "open instance", &response)?;

        tracing::debug!(url = %landing, "Following redirect to landing page");
        let response = self.client.get(landing.clone()).send().await?;
        expect_page(response, "landing page", SSO_LINK).await?;

        let sso = landing.join("/cn-rtr/sso")?;
        tracing::debug!(url = %sso, "Opening SSO form");
        let response = self.client.get(sso.clone()).send().await?;
        expect_page(response, "SSO form", LOGIN_FORM).await?;

        let submit = sso.join("/login")?;
        tracing::info!(url = %submit, username, "Submitting credentials");
        let response = self
            .client
            .post(submit.clone())
            .form(&[
                ("email", username),
                ("password", password),
                ("remember", "on"),
            ])
            .send()
            .await?;
        let app = redirect_target(&submit, "submit credentials", &response)?;
        let info = harvest_cookies(&response)?;

        tracing::debug!(url = %app, "Opening application");
        let response = self
            .client
            .get(app)
            .header(header::COOKIE, info.cookie_header())
            .send()
            .await?;
        expect_status_ok(&response, "open application")?;

        tracing::info!("Login succeeded");
        Ok(info)
    }
}

/// Resolve the `Location` of a redirect response against `base`.
fn redirect_target(base: &Url, step: &'static str, response: &Response) -> Result<Url> {
    let status = response.status();
    if !status.is_redirection() {
        return Err(ProbeError::UnexpectedStatus {
            step,
            expected: "a redirect",
            status: status.as_u16(),
        });
    }

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ProbeError::MissingLocation { step })?;

    Ok(base.join(location)?)
}

fn expect_status_ok(response: &Response, step: &'static str) -> Result<()> {
    let status = response.status();
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(ProbeError::UnexpectedStatus {
            step,
            expected: "200 OK",
            status: status.as_u16(),
        })
    }
}

async fn expect_page(
    response: Response,
    step: &'static str,
    marker: &'static str,
) -> Result<()> {
    expect_status_ok(&response, step)?;

    let body = response.text().await?;
    if body.contains(marker) {
        Ok(())
    } else {
        Err(ProbeError::MissingMarker { step, marker })
    }
}

/// Pull `sid` and `XSRF-TOKEN` out of the `Set-Cookie` headers.
fn harvest_cookies(response: &Response) -> Result<AuthInfo> {
    let mut session_id = None;
    let mut xsrf_token = None;

    let cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| Cookie::parse(v.to_string()).ok());

    for cookie in cookies {
        match cookie.name() {
            SESSION_COOKIE => session_id = Some(cookie.value().to_string()),
            XSRF_COOKIE => xsrf_token = Some(cookie.value().to_string()),
            _ => {}
        }
    }

    Ok(AuthInfo {
        session_id: session_id.ok_or(ProbeError::MissingCookie(SESSION_COOKIE))?,
        xsrf_token: xsrf_token.ok_or(ProbeError::MissingCookie(XSRF_COOKIE))?,
    })
}
