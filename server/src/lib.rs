//! axum HTTP front end for the todo store.
//!
//! # Overview
//! Exposes `GET/POST /todos`, `GET/DELETE /todos/{id}` and `GET /health`
//! over JSON. All state lives in one `TodoStore` shared between requests.
//!
//! # Design
//! - The store sits behind `Arc<RwLock<_>>`: list/get take the read guard,
//!   create/delete take the write guard.
//! - `app()` builds a router over a fresh empty store; `router()` accepts an
//!   existing one so tests can seed or inspect it.
//! - `run_until` serves until the given future resolves; the binary passes
//!   `shutdown_signal()`.

pub mod config;
pub mod error;
pub mod routes;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoStore;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::{ConfigError, ServerConfig};
pub use error::{ErrorBody, ServerError};

pub type Db = Arc<RwLock<TodoStore>>;

pub fn app() -> Router {
    router(Db::default())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo).delete(routes::delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Calling this twice is a no-op.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init();
}
