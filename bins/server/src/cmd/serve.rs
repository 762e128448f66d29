use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::{ServeArgs, ServerConfig};
use crate::error::ServerError;
use log_engine::Log;

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("proglog-server starting");

    // --- Load config ---
    let config = ServerConfig::resolve(&args)?;
    if let Some(path) = &args.config {
        tracing::info!(config = %path, "loaded config");
    }

    // --- CancellationToken for graceful shutdown ---
    let token = CancellationToken::new();

    // Лог живёт всё время процесса, данные теряются при выходе.
    let log = Arc::new(Log::new());

    // --- API server (HTTP) ---
    let api_log = log.clone();
    let api_addr = config.addr.clone();
    let api_token = token.clone();
    let mut api_handle = tokio::spawn(async move {
        log_api_server::run(&api_addr, api_log, api_token).await
    });

    tracing::info!(addr = %config.addr, "server ready");

    // --- Ожидание Ctrl+C или падения API ---
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("shutting down...");
        }
        result = &mut api_handle => {
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ServerError::Api(e)),
                Err(e) => Err(ServerError::Api(format!("api task: {e}"))),
            };
        }
    }

    token.cancel();

    // Drain: wait up to 5s for in-flight requests
    match tokio::time::timeout(Duration::from_secs(5), &mut api_handle).await {
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "api server error"),
        Ok(_) => {}
        Err(_) => {
            tracing::warn!("api server did not stop in time, aborting");
            api_handle.abort();
        }
    }

    tracing::info!(records = log.len(), "shutdown complete");
    Ok(())
}
