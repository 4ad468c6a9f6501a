//! Command line configuration.

use std::{fmt, time::Duration};

use clap::{Args, Parser, Subcommand};
use url::Url;

/// cambium-mock - Deliberately slow mock of the Cambium SSO login
#[derive(Parser, Debug)]
#[command(name = "cambium-mock")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "127.0.0.1", env = "HOST", global = true)]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "4567", env = "PORT", global = true)]
    pub port: u16,

    /// Increase log verbosity
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the mock server (default)
    Serve,

    /// Walk the login flow against a running instance and print the session cookies
    Login(LoginArgs),
}

#[derive(Args)]
pub struct LoginArgs {
    /// Base URL of the instance to log into
    #[arg(long, default_value = "http://127.0.0.1:4567", env = "CAMBIUM_URL")]
    pub url: Url,

    /// Account email
    #[arg(long, default_value = "mock@example.com", env = "CAMBIUM_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(long, default_value = "mock", env = "CAMBIUM_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Give up after this many seconds
    #[arg(long, default_value = "20")]
    pub timeout: u64,
}

impl fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginArgs")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LoginArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Cli {
    /// Default `tracing` directives when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "cambium_mock=debug,tower_http=debug"
        } else {
            "cambium_mock=info,tower_http=info"
        }
    }
}
