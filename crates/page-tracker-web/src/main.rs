//! Page Tracker web server.
//!
//! - `GET /` increments `page_views` in Redis and reports the new value
//! - Config: `page-tracker.yaml` (optional) + `REDIS_URL`
//! - Graceful shutdown on Ctrl-C / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use page_tracker_core::error::{Result, PageTrackerError};
use page_tracker_web::{app_state, config, router, store::redis::redact_url};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "page-tracker failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::resolve()?;
    let listen = cfg.web.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, store = %redact_url(&cfg.store.url), "page-tracker starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PageTrackerError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PageTrackerError::Internal(format!("server failed: {e}")))?;

    tracing::info!("page-tracker stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("shutdown signal received, draining");
}
