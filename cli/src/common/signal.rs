//! # CalcBot Shutdown Signal Handling
//!
//! File: cli/src/common/signal.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module provides the shared shutdown future used by both long-running
//! commands. The `serve` command hands it to axum's graceful shutdown; the
//! `bot` command races it against the Telegram polling loop.
//!
//! ## Examples
//!
//! ```rust
//! axum::serve(listener, app)
//!     .with_graceful_shutdown(signal::shutdown_signal())
//!     .await?;
//! ```
//!
use tracing::{error, info};

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Creates a future that resolves when a shutdown signal (Ctrl+C or SIGTERM
/// on Unix) is received. This allows long-running commands to stop accepting
/// new work and finish processing in-flight work before exiting.
///
/// ## Returns
///
/// * `impl Future<Output = ()>`: A future that completes when either Ctrl+C
///   is detected or a SIGTERM signal is received (on Unix systems).
pub async fn shutdown_signal() {
    // Future that completes when Ctrl+C is pressed.
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    // Future that completes when SIGTERM is received (Unix-specific).
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                // Keep the future pending indefinitely if the handler fails.
                std::future::pending::<()>().await;
            }
        }
    };

    // On non-Unix platforms, SIGTERM handling is not applicable, so create a future that never completes.
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Wait for either Ctrl+C or SIGTERM to occur.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
