use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::connector::http::{http_app, AppState};

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn serve(
        &self,
        host: String,
        port: u16,
        static_dir: PathBuf,
        templates_dir: PathBuf,
    ) -> Result<String> {
        for dir in [&static_dir, &templates_dir] {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let state = AppState::new(self.container.chat_use_case(), templates_dir);
        let app = http_app(state, &static_dir);

        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!(
            "Starting server on http://{} (mock generation: {})",
            listener.local_addr()?,
            self.container.mock_generation()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok("Server stopped.".to_string())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
