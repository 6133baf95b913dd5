use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use invoice_core::error::AppError;
use invoice_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ShareConfig;
use crate::handlers;
use crate::services::{FileShareStore, ShareStore};

#[derive(Clone)]
pub struct AppState {
    pub config: ShareConfig,
    pub store: Arc<dyn ShareStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: ShareConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ShareStore> = Arc::new(
            FileShareStore::new(&config.storage.path)
                .await
                .map_err(|e| {
                    tracing::error!(
                        "Failed to initialize share store at {}: {}",
                        config.storage.path,
                        e
                    );
                    e
                })?,
        );

        let state = AppState {
            config: config.clone(),
            store,
        };

        // The viewer page is served from a different origin in development,
        // hence the permissive CORS layer.
        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics))
            .route("/api/share", post(handlers::create_share))
            .route("/api/share/:id", get(handlers::get_share))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(metrics_middleware))
            .layer(from_fn(request_id_middleware))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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
