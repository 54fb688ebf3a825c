//! FileHeap server — file metadata service over object storage.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use fileheap_core::config::AppConfig;
use fileheap_core::error::AppError;
use fileheap_core::traits::object_store::ObjectStore;
use fileheap_core::traits::token_validator::TokenValidator;

#[tokio::main]
async fn main() {
    let env = std::env::var("FILEHEAP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FileHeap v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = fileheap_database::DatabasePool::connect(&config.database).await?;
    fileheap_database::migration::run_migrations(db.pool()).await?;
    db.health_check().await?;

    // ── Step 2: Object store ─────────────────────────────────────
    let objects: Arc<dyn ObjectStore> = match config.storage.provider.as_str() {
        "memory" => Arc::new(fileheap_storage::InMemoryObjectStore::new(
            config.storage.bucket.clone(),
        )),
        _ => Arc::new(fileheap_storage::S3ObjectStore::new(&config.storage).await?),
    };
    tracing::info!(provider = objects.provider_type(), "Object store initialized");

    // The bucket may come up after us; log instead of refusing to start.
    if let Err(e) = objects.health_check().await {
        tracing::warn!(error = %e, "Object store is not reachable yet");
    }

    // ── Step 3: Auth client ──────────────────────────────────────
    let token_validator: Arc<dyn TokenValidator> =
        Arc::new(fileheap_auth::RemoteTokenValidator::new(&config.auth)?);

    // ── Step 4: Repositories & services ──────────────────────────
    let file_repo = Arc::new(fileheap_database::FileRepository::new(db.pool().clone()));
    let file_service = Arc::new(fileheap_service::FileService::new(
        file_repo,
        Arc::clone(&objects),
        Duration::from_secs(config.storage.presign_ttl_seconds),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = fileheap_api::AppState {
        config: Arc::new(config),
        token_validator,
        file_service,
    };
    let app = fileheap_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FileHeap server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("FileHeap server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
}
