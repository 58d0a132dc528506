//! # CalcBot HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module implements the HTTP server for the `calcbot serve` command:
//! one POST route per arithmetic operation, request/response tracing, CORS
//! configuration, and graceful shutdown handling.
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Set up the Axum router with the four operation routes and middleware
//! 2. Bind a listener to the configured address
//! 3. Start the server with graceful shutdown handlers
//! 4. Display connection information (base URL, CORS status)
//!
//! The configured address is part of the bot's configuration, so a bind
//! conflict is a hard error rather than a reason to scan for another port.
//!
//! ## Examples
//!
//! Basic usage from the command handler:
//!
//! ```rust
//! // Load configuration
//! let config = config::load_and_merge_config(args)?;
//!
//! // Run the server
//! server_logic::run_server(config).await?;
//! ```
//!
use super::config::ServiceConfig;
use super::handlers;
use crate::common::signal;
use crate::core::error::Result;
use crate::core::math::Operation;
use anyhow::Context;
use axum::{routing::post, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

/// # Run HTTP Server (`run_server`)
///
/// Initializes and starts the main Axum HTTP server according to the
/// provided configuration.
///
/// ## Process:
/// 1. Creates the core Axum application router using `create_app`.
/// 2. Prints server information to the console (base URL, bind address, CORS status).
/// 3. Binds a `TcpListener` to the configured network address.
/// 4. Starts the Axum server, serving the application via the listener.
/// 5. Configures graceful shutdown handling using the shared shutdown signal
///    to respond to Ctrl+C or termination signals.
///
/// ## Arguments
///
/// * `config`: The `ServiceConfig` struct containing all necessary server
///   settings (port, host, CORS).
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` if the server starts and runs
///   successfully until shutdown.
///
/// ## Errors
///
/// This function can return errors if:
/// - Binding the `TcpListener` to the configured address fails (port in use,
///   permissions).
/// - The Axum server itself encounters a fatal error during operation.
pub async fn run_server(config: ServiceConfig) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);

    // Create the Axum application router with all routes and middleware.
    let app = create_app(&config);

    // Display server information to the user upon startup.
    let routes: Vec<&str> = Operation::ALL.iter().map(|op| op.route()).collect();
    println!("\n=================================================================");
    println!("🧮 Calculator API ready");
    println!("🌐 Base URL:          {}", config.base_url());
    println!("➗ Operations:        {}", routes.join(", "));
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting arithmetic service on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    // Bind the TCP listener to the configured socket address. The address is
    // advertised to the bot, so failure to bind must surface as an error.
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    // Start the Axum server, serving the application (`app`) using the listener.
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
        .context("HTTP server failed")?; // Propagate any server errors.

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Create Axum Application (`create_app`)
///
/// Constructs and configures the main Axum `Router` instance: one POST route
/// per operation under `/api/v1/`, plus middleware (CORS, tracing).
///
/// ## Arguments
///
/// * `config`: A reference to the `ServiceConfig` containing the CORS
///   enablement flag.
///
/// ## Returns
///
/// * `Router`: The fully configured Axum `Router` ready to be served.
pub fn create_app(config: &ServiceConfig) -> Router {
    // Configure the CORS middleware layer based on the config flag.
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new() // Effectively a no-op layer.
    };

    // Configure the tracing middleware for logging HTTP requests and responses.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build the main router: one route per operation, matching the fixed
    // operation table in core::math.
    Router::new()
        .route("/api/v1/add", post(handlers::handle_add))
        .route("/api/v1/sub", post(handlers::handle_sub))
        .route("/api/v1/mul", post(handlers::handle_mul))
        .route("/api/v1/div", post(handlers::handle_div))
        // Apply middleware layers.
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer) // Apply tracing first.
                .layer(cors_layer), // Then apply CORS.
        )
}

// --- Unit Tests ---
