//! Extrato Server
//!
//! HTTP front-end for PDF extraction: uploads are converted by a
//! process-wide MuPDF-backed document converter and returned as JSON.

use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extrato_server::config::Config;
use extrato_server::routes;
use extrato_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrato_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing::info!("Starting Extrato Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Pipeline: picture_images={} images_scale={} table_structure={} ocr={}",
        config.pipeline.generate_picture_images,
        config.pipeline.images_scale,
        config.pipeline.do_table_structure,
        config.pipeline.do_ocr
    );

    // Create application state
    let state = AppState::new(config.clone());

    // Warm the converter before accepting traffic
    tracing::info!("Pre-carregando DocumentConverter...");
    state
        .converter()
        .get_or_init()
        .expect("Failed to initialize DocumentConverter");
    tracing::info!("Converter pronto.");

    // Build router
    let app = routes::app(state);

    // Start server with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid SERVER_HOST/SERVER_PORT");
    tracing::info!("Extrato Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
