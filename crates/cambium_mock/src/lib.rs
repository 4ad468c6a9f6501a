//! Mock of the Cambium SSO login.
//!
//! This crate provides:
//! - A deliberately slow HTTP responder for the Cambium login routes
//! - The fixed session cookies a successful login hands out
//! - A login probe that walks the flow the way a browser-driven client does

pub mod app;
pub mod cli;
pub mod cookies;
mod error;
mod handlers;
pub mod latency;
pub mod probe;
mod server;

pub use app::create_app;
pub use error::MockError;
pub use probe::{AuthInfo, LoginProbe, ProbeError};
pub use server::MockServer;
