//! # CalcBot Telegram Relay Configuration
//!
//! File: cli/src/commands/bot/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module handles configuration for the `calcbot bot` command. Unlike
//! the service, the bot has no configuration file: everything comes from
//! command-line arguments and the environment. The single required
//! credential (the bot access token) is read from `TELEGRAM_BOT_TOKEN` and
//! never echoed back in help output or logs.
//!
//! ## Examples
//!
//! ```bash
//! export TELEGRAM_BOT_TOKEN=123456:ABC-DEF...
//!
//! # Defaults: local service, 5 s request timeout, 30 s long-poll.
//! calcbot bot
//!
//! # Override the service location and timeouts.
//! calcbot bot --api-url http://calc.internal:8000/api/v1 --timeout 10
//! ```
//!
use crate::core::error::{CalcbotError, Result};
use clap::Parser;
use std::time::Duration;

/// # Bot Command Arguments (`BotArgs`)
///
/// Defines the command-line arguments accepted by the `calcbot bot` command,
/// parsed using `clap`. The token argument falls back to the
/// `TELEGRAM_BOT_TOKEN` environment variable (the usual way to supply it);
/// clap reports a missing-argument error if neither is present.
#[derive(Parser, Debug)]
pub struct BotArgs {
    /// Telegram bot access token. Usually supplied via the environment
    /// rather than the command line so it stays out of shell history.
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the arithmetic service the bot relays commands to.
    #[arg(long, default_value = "http://127.0.0.1:8000/api/v1")]
    pub api_url: String,

    /// Per-request timeout in seconds for calculator service calls.
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Long-poll timeout in seconds for Telegram getUpdates calls.
    #[arg(long, default_value_t = 30)]
    pub poll_timeout: u64,
}

/// # Effective Bot Configuration (`BotConfig`)
///
/// Holds the validated configuration for the bot: the credential, the
/// service base URL (normalized without a trailing slash), and the two
/// timeouts as `Duration`s.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// The Telegram bot access token.
    pub token: String,

    /// Base URL of the arithmetic service, without a trailing slash.
    pub api_url: String,

    /// Timeout for a single calculator service call.
    pub request_timeout: Duration,

    /// Telegram long-poll duration.
    pub poll_timeout: Duration,
}

/// # Load Bot Configuration (`load_config`)
///
/// Validates the parsed arguments and produces the effective `BotConfig`.
///
/// ## Arguments
///
/// * `args`: The parsed `BotArgs`.
///
/// ## Returns
///
/// * `Result<BotConfig>`: The validated configuration.
///
/// ## Errors
///
/// Returns a configuration error if:
/// - The token is empty (e.g., `TELEGRAM_BOT_TOKEN` was set but blank).
/// - The service URL is empty.
pub fn load_config(args: BotArgs) -> Result<BotConfig> {
    // clap guarantees presence, but an empty environment variable still
    // satisfies it; reject that explicitly.
    if args.token.trim().is_empty() {
        return Err(CalcbotError::Config(
            "Bot token must not be empty (set TELEGRAM_BOT_TOKEN)".to_string(),
        ))?;
    }

    if args.api_url.trim().is_empty() {
        return Err(CalcbotError::Config(
            "Service URL must not be empty".to_string(),
        ))?;
    }

    Ok(BotConfig {
        token: args.token,
        // Normalize so endpoint paths can always be joined with '/'.
        api_url: args.api_url.trim_end_matches('/').to_string(),
        request_timeout: Duration::from_secs(args.timeout),
        poll_timeout: Duration::from_secs(args.poll_timeout),
    })
}

// --- Unit Tests ---
