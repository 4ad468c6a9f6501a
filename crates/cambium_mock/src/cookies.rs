//! The fixed session cookies handed out by a successful login.

use axum::{http::header::SET_COOKIE, response::AppendHeaders};
use axum_extra::extract::cookie::Cookie;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";
/// Value of the session cookie.
pub const SESSION_ID: &str = "s:1234+y";

/// Name of the anti-forgery cookie.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Value of the anti-forgery cookie.
pub const XSRF_TOKEN: &str = "asdfadfsadsf";

/// Build the two login cookies.
///
/// Neither is HTTP-only, since the client scripts read them back, and
/// neither carries an expiry, so both live for the browser session.
pub fn login_cookies() -> [Cookie<'static>; 2] {
    [
        build(SESSION_COOKIE, SESSION_ID),
        build(XSRF_COOKIE, XSRF_TOKEN),
    ]
}

fn build(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build((name, value)).path("/").http_only(false).build()
}

/// `Set-Cookie` headers for [`login_cookies`].
///
/// Written with the cookie's plain `Display` form so values go out
/// literally (`sid=s:1234+y`) instead of percent-encoded.
pub fn set_login_cookies() -> AppendHeaders<[(axum::http::HeaderName, String); 2]> {
    let [session, xsrf] = login_cookies();

    AppendHeaders([
        (SET_COOKIE, session.to_string()),
        (SET_COOKIE, xsrf.to_string()),
    ])
}
