//! Login probe error types.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for the probe module.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors that can occur while walking the login flow.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{step}: expected {expected}, got {status}")]
    UnexpectedStatus {
        step: &'static str,
        expected: &'static str,
        status: u16,
    },

    #[error("{step}: redirect without a usable Location header")]
    MissingLocation { step: &'static str },

    #[error("{step}: page does not contain {marker}")]
    MissingMarker {
        step: &'static str,
        marker: &'static str,
    },

    #[error("login response did not set the {0} cookie")]
    MissingCookie(&'static str),

    #[error("login did not complete within {0:?}")]
    Timeout(Duration),
}
