//! # CalcBot Arithmetic Service Command
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module provides the `calcbot serve` command: a stateless HTTP JSON
//! API exposing the four arithmetic operations. Each operation has its own
//! `POST /api/v1/<op>` route accepting `{"a": <float>, "b": <float>}` and
//! returning `{"result": <float>}`; division by zero is rejected with a
//! `400 {"detail": ...}` response.
//!
//! ## Architecture
//!
//! The module is organized into three key components:
//! - `config.rs`: Argument parsing and configuration-file merging
//! - `handlers.rs`: Request/response DTOs and the per-operation handlers
//! - `server_logic.rs`: Router construction and the server lifecycle
//!
//! The main `handle_serve` function serves as the entry point for the
//! command, processing arguments and launching the server.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:8000)
//! calcbot serve
//!
//! # Specify a port and host interface
//! calcbot serve --port 9000 --host 0.0.0.0
//!
//! # Disable CORS headers
//! calcbot serve --no-cors
//! ```
//!
use crate::core::error::Result;
use tracing::info;

// --- Subcommand Argument Re-export ---
// Make the argument struct from the config module publicly available.
pub use config::ServeArgs;

// --- Submodule Declarations ---

/// Handles configuration loading and merging for the arithmetic service.
pub mod config;

/// Request/response types and the per-operation axum handlers.
pub mod handlers;

/// Contains the core Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// The main entry point function for the `calcbot serve` command.
///
/// It performs the following steps:
/// 1. Logs the reception of the command and its arguments.
/// 2. Loads and merges the service configuration using the `config`
///    submodule (command-line arguments over `.calcbot-srv.toml` over
///    defaults).
/// 3. Delegates the actual server execution (binding, routing, serving) to
///    `server_logic::run_server`.
///
/// ## Arguments
///
/// * `args`: The parsed `ServeArgs` struct containing the command-line
///   arguments provided by the user (port, host, CORS flag).
///
/// ## Returns
///
/// * `Result<()>`: Propagates the `Result` from configuration loading or
///   server execution.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(args)?;
    info!("Effective service config: {:?}", config);

    server_logic::run_server(config).await?;

    Ok(())
}
