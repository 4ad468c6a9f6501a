//! Listener lifecycle for the mock.

use std::{future::Future, net::SocketAddr};

use tokio::net::TcpListener;

use crate::{app::create_app, error::MockError};

/// The Cambium mock bound to a TCP listener.
pub struct MockServer {
    listener: TcpListener,
}

impl MockServer {
    /// Bind a fresh listener on `host:port`.
    ///
    /// Port `0` picks an ephemeral port; read it back with [`MockServer::local_addr`].
    pub async fn bind(host: &str, port: u16) -> Result<Self, MockError> {
        let addr = format!("{host}:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| MockError::bind(addr, source))?;

        Ok(Self { listener })
    }

    /// Adopt an already-bound std listener (e.g. one handed over by `listenfd`).
    pub fn from_std(listener: std::net::TcpListener) -> Result<Self, MockError> {
        listener.set_nonblocking(true)?;

        Ok(Self {
            listener: TcpListener::from_std(listener)?,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, MockError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until the process is killed.
    pub async fn run(self) -> Result<(), MockError> {
        self.run_until(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), MockError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Cambium mock listening on http://{}", self.local_addr()?);

        axum::serve(self.listener, create_app())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Cambium mock stopped");
        Ok(())
    }
}
