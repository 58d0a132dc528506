//! # CalcBot Telegram Relay Command
//!
//! File: cli/src/commands/bot/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module provides the `calcbot bot` command: a Telegram bot that
//! relays chat commands (`/add 2 3`, `/div 10 4`, ...) to the arithmetic
//! service and sends the formatted result back to the chat. Parse errors are
//! answered directly without calling the service; service domain errors
//! (division by zero) are relayed verbatim; transport errors are answered
//! with a deliberately generic message and logged in full for operators.
//!
//! ## Architecture
//!
//! The module is organized into four key components:
//! - `config.rs`: Argument parsing (token from the environment) and validation
//! - `telegram.rs`: Minimal typed client for the Telegram Bot API (long polling)
//! - `client.rs`: HTTP client for the arithmetic service
//! - `commands.rs`: Chat command parsing and reply rendering (pure functions)
//!
//! The main `handle_bot` function wires them together: one long-polling loop
//! that processes each update independently and races against the shared
//! shutdown signal.
//!
//! ## Examples
//!
//! ```bash
//! # Token comes from the environment; the service runs locally.
//! export TELEGRAM_BOT_TOKEN=123456:ABC-DEF...
//! calcbot bot
//!
//! # Point the bot at a service on another host.
//! calcbot bot --api-url http://calc.internal:8000/api/v1
//! ```
//!
use crate::common::signal;
use crate::core::error::{CalcbotError, Result};
use std::time::Duration;
use tracing::{error, info, warn};

// --- Subcommand Argument Re-export ---
pub use config::BotArgs;

// --- Submodule Declarations ---

/// Handles argument parsing and validation for the bot.
pub mod config;

/// HTTP client for the arithmetic service.
pub mod client;

/// Chat command parsing and reply rendering.
pub mod commands;

/// Minimal Telegram Bot API client (getUpdates / sendMessage).
pub mod telegram;

use client::CalcClient;
use commands::{BotCommand, ParseOutcome};
use telegram::{TelegramClient, Update};

/// Pause between polls after a failed `getUpdates` call, so a Telegram
/// outage doesn't turn the loop into a busy spin.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// # Handle Bot Command (`handle_bot`)
///
/// The main entry point function for the `calcbot bot` command.
///
/// It performs the following steps:
/// 1. Validates the configuration (token, service URL, timeouts).
/// 2. Constructs the Telegram client and the calculator service client.
/// 3. Runs the long-polling loop until a shutdown signal arrives.
///
/// ## Arguments
///
/// * `args`: The parsed `BotArgs` struct (token via `TELEGRAM_BOT_TOKEN`,
///   service URL, timeouts).
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after a clean shutdown, or an error if
///   configuration or client construction fails.
pub async fn handle_bot(args: BotArgs) -> Result<()> {
    info!("Handling bot command");

    let config = config::load_config(args)?;
    let telegram = TelegramClient::new(&config.token, config.poll_timeout)?;
    let calc = CalcClient::new(&config.api_url, config.request_timeout)?;

    info!(
        "Bot started, relaying to {}. Waiting for messages...",
        config.api_url
    );

    // Poll until a shutdown signal arrives. Each update is handled
    // independently; nothing is shared between them.
    tokio::select! {
        _ = signal::shutdown_signal() => {
            info!("Shutting down bot.");
        }
        result = poll_loop(&telegram, &calc) => {
            result?;
        }
    }

    println!("\nBot shutdown complete.");
    Ok(())
}

/// # Polling Loop (`poll_loop`)
///
/// Long-polls the Telegram API for updates and dispatches each one. The
/// update offset is advanced past every update that was received, so each
/// update is consumed exactly once. A failed `getUpdates` call is logged and
/// retried after a short pause; the loop itself never gives up.
async fn poll_loop(telegram: &TelegramClient, calc: &CalcClient) -> Result<()> {
    let mut offset: i64 = 0;

    loop {
        let updates = match telegram.get_updates(offset).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("getUpdates failed, retrying shortly: {}", e);
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            // Confirm the update so the next poll doesn't replay it.
            offset = offset.max(update.update_id + 1);
            handle_update(telegram, calc, update).await;
        }
    }
}

/// # Handle Update (`handle_update`)
///
/// Processes a single Telegram update: parses the command text, performs the
/// service call if one is needed, and sends the reply. Failures to *send*
/// the reply are logged and swallowed so one bad chat cannot stall the loop.
///
/// ## Arguments
///
/// * `telegram`: The Telegram client, for sending the reply.
/// * `calc`: The calculator service client.
/// * `update`: The update to process.
async fn handle_update(telegram: &TelegramClient, calc: &CalcClient, update: Update) {
    // Updates without a text message (edits, stickers, joins) are ignored.
    let Some(message) = update.message else {
        return;
    };
    let Some(text) = message.text.as_deref() else {
        return;
    };
    let chat_id = message.chat.id;

    let reply = match commands::parse_message(text) {
        // Non-command chatter and unknown commands get no reply.
        ParseOutcome::Ignore => return,
        // Parse errors are answered locally; no service call is made.
        ParseOutcome::Reply(reply) => reply.to_string(),
        ParseOutcome::Command(BotCommand::Help) => commands::usage_text().to_string(),
        ParseOutcome::Command(BotCommand::Calc { op, a, b }) => {
            match calc.calc(op, a, b).await {
                Ok(result) => commands::render_result(op, a, b, result),
                // The service rejected the calculation (division by zero):
                // relay its detail message verbatim.
                Err(CalcbotError::CalcRejected { detail }) => commands::render_rejection(&detail),
                // Anything else (unexpected status, network failure, timeout)
                // is an operator problem. Log the full error, tell the user
                // something deliberately generic.
                Err(e) => {
                    error!("Calculator API call for /{} failed: {}", op.route(), e);
                    commands::SERVER_ERROR_REPLY.to_string()
                }
            }
        }
    };

    if let Err(e) = telegram.send_message(chat_id, &reply).await {
        error!("Failed to send reply to chat {}: {}", chat_id, e);
    }
}
