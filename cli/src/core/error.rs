//! # CalcBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the CalcBot application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CalcbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the application's domains:
//! - Configuration errors (bad TOML values, missing credentials)
//! - Calculator API errors (domain rejections, unexpected statuses)
//! - Transport errors (network/timeout failures via `reqwest`)
//! - Telegram Bot API errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if token.is_empty() {
//!     return Err(CalcbotError::Config("Bot token must not be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match client.calc(op, a, b).await {
//!     Ok(result) => reply_with(result),
//!     Err(CalcbotError::CalcRejected { detail }) => reply_with_detail(detail),
//!     Err(e) => reply_generic_and_log(e),
//! }
//! ```
//!
//! The error system provides detailed error messages to operators via logs
//! while letting the bot keep its user-facing replies deliberately generic.
//!
use thiserror::Error;

/// Custom error type for the CalcBot application.
#[derive(Error, Debug)]
pub enum CalcbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The calculator service rejected the request with a 400 and a
    /// `{detail}` body (division by zero). The detail is shown to the user
    /// verbatim; every other variant is reported generically.
    #[error("Calculation rejected: {detail}")]
    CalcRejected { detail: String },

    #[error("Calculator service returned unexpected status {status}")]
    ApiStatus { status: reqwest::StatusCode },

    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Telegram API error: {0}")]
    Telegram(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
