//! # CalcBot Telegram Bot API Client
//!
//! File: cli/src/commands/bot/telegram.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module implements a minimal typed client for the two Telegram Bot
//! API methods the relay needs: `getUpdates` (long polling) and
//! `sendMessage`. Only the response fields the relay actually reads are
//! modeled; everything else in the Telegram payload is ignored during
//! deserialization.
//!
//! ## Architecture
//!
//! - `Update` / `Message` / `Chat`: the slice of the Telegram object model
//!   the bot consumes (`update_id`, `message.text`, `message.chat.id`).
//! - `ApiReply<T>`: the uniform `{ok, result, description}` envelope every
//!   Bot API method responds with. `ok == false` becomes a
//!   `CalcbotError::Telegram` carrying the description.
//! - `TelegramClient`: a `reqwest::Client` plus the token-scoped base URL.
//!   The token is embedded in the URL per the Bot API convention, so the URL
//!   itself is never logged.
//!
//! ## Examples
//!
//! ```rust
//! let telegram = TelegramClient::new(&token, Duration::from_secs(30))?;
//! let updates = telegram.get_updates(0).await?;
//! for update in updates {
//!     // ... dispatch ...
//!     telegram.send_message(chat_id, "2.0 + 3.0 = 5.0").await?;
//! }
//! ```
//!
use crate::core::error::CalcbotError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Host of the Telegram Bot API.
const TELEGRAM_API_HOST: &str = "https://api.telegram.org";

/// Extra slack added to the HTTP timeout on top of the long-poll duration,
/// so the client-side timeout never fires before the server-side one.
const LONG_POLL_SLACK: Duration = Duration::from_secs(10);

/// One incoming Telegram update.
#[derive(Deserialize, Debug, Clone)]
pub struct Update {
    /// Monotonically increasing update identifier; the poll offset is
    /// advanced past it once the update has been handled.
    pub update_id: i64,
    /// The message payload, if this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// The slice of a Telegram message the relay reads.
#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    /// The chat the message arrived in (and the reply goes back to).
    pub chat: Chat,
    /// The message text; absent for stickers, photos, and similar.
    #[serde(default)]
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Deserialize, Debug, Clone)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,
}

/// The `{ok, result, description}` envelope common to all Bot API methods.
#[derive(Deserialize, Debug)]
struct ApiReply<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiReply<T> {
    /// Unwraps the envelope: the payload on `ok == true`, a Telegram error
    /// (with the API's description when present) otherwise.
    fn into_result(self, method: &str) -> Result<Option<T>, CalcbotError> {
        if self.ok {
            Ok(self.result)
        } else {
            Err(CalcbotError::Telegram(self.description.unwrap_or_else(
                || format!("{} returned ok=false", method),
            )))
        }
    }
}

/// # Telegram Client (`TelegramClient`)
///
/// A thin wrapper around `reqwest::Client` scoped to one bot token.
pub struct TelegramClient {
    http: reqwest::Client,
    /// `https://api.telegram.org/bot<token>`. Contains the credential, so
    /// it must never appear in logs.
    base_url: String,
    /// Long-poll duration passed to getUpdates.
    poll_timeout: Duration,
}

impl TelegramClient {
    /// # Create Telegram Client (`new`)
    ///
    /// Builds the HTTP client with a request timeout generous enough for
    /// long polling.
    ///
    /// ## Arguments
    ///
    /// * `token`: The bot access token.
    /// * `poll_timeout`: How long a `getUpdates` call may idle server-side.
    ///
    /// ## Returns
    ///
    /// * `Result<Self, CalcbotError>`: The client, or a transport error if
    ///   `reqwest` fails to construct one (invalid TLS configuration).
    pub fn new(token: &str, poll_timeout: Duration) -> Result<Self, CalcbotError> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + LONG_POLL_SLACK)
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/bot{}", TELEGRAM_API_HOST, token),
            poll_timeout,
        })
    }

    /// # Get Updates (`get_updates`)
    ///
    /// Long-polls the Bot API for updates at or after `offset`. Returns an
    /// empty vector when the poll times out server-side with nothing new.
    ///
    /// ## Arguments
    ///
    /// * `offset`: Identifier of the first update to return; updates below
    ///   it are confirmed (dropped) by Telegram.
    ///
    /// ## Returns
    ///
    /// * `Result<Vec<Update>, CalcbotError>`: The pending updates, a
    ///   transport error, or a Telegram error for an `ok=false` envelope.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, CalcbotError> {
        let reply: ApiReply<Vec<Update>> = self
            .http
            .get(format!("{}/getUpdates", self.base_url))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", self.poll_timeout.as_secs().to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let updates = reply.into_result("getUpdates")?.unwrap_or_default();
        if !updates.is_empty() {
            debug!("Received {} update(s)", updates.len());
        }
        Ok(updates)
    }

    /// # Send Message (`send_message`)
    ///
    /// Sends a plain-text message to a chat.
    ///
    /// ## Arguments
    ///
    /// * `chat_id`: The destination chat.
    /// * `text`: The message text.
    ///
    /// ## Returns
    ///
    /// * `Result<(), CalcbotError>`: `Ok(())` on success, a transport error,
    ///   or a Telegram error for an `ok=false` envelope.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), CalcbotError> {
        let reply: ApiReply<serde_json::Value> = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
            }))
            .send()
            .await?
            .json()
            .await?;

        reply.into_result("sendMessage")?;
        Ok(())
    }
}

// --- Unit Tests ---
