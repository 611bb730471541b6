//! Silent Disease Risk - Inference API Server
//!
//! Serves the stored per-disease models and the weighted explainable scorer
//! over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   SILENT RISK SERVER                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────────────────────────┐   │
//! │  │  API      │──►│  ModelRegistry (read-only, Arc)  │   │
//! │  │  (Axum)   │   │  schema → scaler → classifier    │   │
//! │  └───────────┘   └────────────────┬─────────────────┘   │
//! │                                   ▼                     │
//! │                         MODELS_DIR/*_model.json         │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use risk_core::ModelRegistry;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!("Silent Risk inference server starting...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Models directory: {}", config.models_dir.display());

    // Load models once; the registry is never mutated afterwards
    let registry = ModelRegistry::load_from_dir(&config.models_dir);
    if registry.loaded_count() == 0 {
        tracing::warn!("No models loaded, prediction endpoints will answer 503");
    }

    // Build application state
    let state = AppState {
        registry: Arc::new(registry),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server terminated")?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "risk_server=debug,risk_core=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict/:disease", post(handlers::predict::predict))
        .route("/assess", post(handlers::assess::assess))
        .route("/assess/overall", post(handlers::assess::overall))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
