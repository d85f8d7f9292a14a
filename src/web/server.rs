//! HTTP server for the portal.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::handlers::AppState;
use super::router::create_router;
use crate::config::ServerConfig;
use crate::{PortalError, Result};

/// The portal web server.
pub struct WebServer {
    addr: SocketAddr,
    router: Router,
}

impl WebServer {
    /// Create a new web server from configuration and application state.
    pub fn new(config: &ServerConfig, state: AppState) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| PortalError::Config(format!("invalid server address: {e}")))?;

        Ok(Self {
            addr,
            router: create_router(state, &config.assets_path),
        })
    }

    /// The address the server will bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!("Listening on http://{}", self.addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
