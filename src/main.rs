use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};

use posts_authors_api_docs::{
    config::Config,
    create_router,
    docs::{build_openapi, DocsState},
    middleware::init_tracing,
    router::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH},
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Build and check the OpenAPI document once; it is immutable afterwards
    let docs = match DocsState::new(build_openapi(&config.docs.server_url)) {
        Ok(docs) => {
            info!(
                "OpenAPI document ready: {} paths, server {}",
                docs.openapi().paths.paths.len(),
                config.docs.server_url
            );
            Arc::new(docs)
        }
        Err(e) => {
            error!("Failed to build OpenAPI document: {}", e);
            std::process::exit(1);
        }
    };

    let app = create_router(docs, &config);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("OpenAPI document served at {}", OPENAPI_JSON_PATH);
    if config.docs.swagger_ui {
        info!("Swagger UI served at {}", SWAGGER_UI_PATH);
    }

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
