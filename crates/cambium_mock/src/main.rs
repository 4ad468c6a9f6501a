use anyhow::{Context, Result};
use cambium_mock::{
    cli::{Cli, Command, LoginArgs},
    LoginProbe, MockServer,
};
use clap::Parser;
use listenfd::ListenFd;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Some(Command::Login(ref args)) => login(args).await,
        Some(Command::Serve) | None => serve(&cli).await,
    }
}

async fn serve(cli: &Cli) -> Result<()> {
    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let server = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => MockServer::from_std(listener)?,
        // Otherwise fall back to CLI-specified host:port
        None => MockServer::bind(&cli.host, cli.port).await?,
    };

    server.run_until(shutdown_signal()).await?;
    Ok(())
}

async fn login(args: &LoginArgs) -> Result<()> {
    let probe = LoginProbe::new(args.url.clone(), args.timeout())?;

    let info = probe
        .login(&args.username, &args.password)
        .await
        .with_context(|| format!("login against {} failed", probe.base_url()))?;

    println!("sid={}", info.session_id);
    println!("XSRF-TOKEN={}", info.xsrf_token);
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
