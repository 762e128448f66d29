pub mod error;
pub mod http;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{on, MethodFilter};
use axum::Router;
use tokio_util::sync::CancellationToken;

use log_engine::Log;

pub use error::ApiError;

#[derive(Clone)]
struct AppState {
    log: Arc<Log>,
}

/// Роутер с единственным маршрутом `/`, диспетчеризация по методу.
///
/// GET читает запись по offset'у, POST добавляет запись, остальные
/// методы (включая HEAD) получают 400. Лимита на размер тела нет.
pub fn router(log: Arc<Log>) -> Router {
    let state = AppState { log };

    Router::new()
        .route(
            "/",
            on(MethodFilter::GET, http::handle_consume)
                .post(http::handle_produce)
                .fallback(http::handle_unexpected_method),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// HTTP API сервер лога.
pub async fn run(
    addr: &str,
    log: Arc<Log>,
    shutdown: CancellationToken,
) -> Result<(), String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind api {addr}: {e}"))?;
    serve(listener, log, shutdown).await
}

/// Обслуживать уже привязанный listener до отмены `shutdown`.
pub async fn serve(
    listener: tokio::net::TcpListener,
    log: Arc<Log>,
    shutdown: CancellationToken,
) -> Result<(), String> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "api server listening");
    }

    axum::serve(listener, router(log))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| format!("axum serve: {e}"))?;

    tracing::info!("api server stopped");
    Ok(())
}
