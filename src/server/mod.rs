//! Web UI for the document processor.
//!
//! A single form (text area + file upload) over the same pipeline the
//! CLI uses. Each POST runs the full pipeline to completion before the
//! response is rendered.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::pipeline::Pipeline;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::new(settings)),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = bind.parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
