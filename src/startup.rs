use crate::config::BiorecodeConfig;
use crate::handlers;
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::{NcbiClient, SummaryGenerator};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared per-process state handed to every handler.
///
/// Holds only clients and configuration; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub ncbi: NcbiClient,
    pub summarizer: SummaryGenerator,
}

pub struct Application {
    listener: TcpListener,
    port: u16,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router. Port 0 picks a free port.
    pub async fn build(config: BiorecodeConfig) -> std::io::Result<Self> {
        let ncbi = NcbiClient::new(&config.ncbi.base_url)
            .map_err(|e| std::io::Error::other(format!("NCBI client error: {}", e)))?;

        let provider = GeminiTextProvider::new(config.gemini.clone())
            .map_err(|e| std::io::Error::other(format!("Gemini provider error: {}", e)))?;
        let summarizer = SummaryGenerator::new(Arc::new(provider));

        let state = AppState { ncbi, summarizer };

        let router = Router::new()
            .route("/search", post(handlers::search))
            .route("/test", get(handlers::health))
            .layer(TraceLayer::new_for_http())
            // Permissive CORS so the single-page tester can call the backend
            // from any origin.
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            listener,
            port,
            router,
        })
    }

    pub fn http_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("HTTP server listening on port {}", self.port);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
