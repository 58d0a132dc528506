//! # CalcBot Arithmetic Service Client
//!
//! File: cli/src/commands/bot/client.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module implements the bot's HTTP client for the arithmetic service.
//! It speaks the same wire types the service defines (`CalcRequest`,
//! `CalcResponse`, `ErrorDetail`) and maps the three possible outcomes onto
//! the error taxonomy:
//!
//! - `200 {result}` → the computed value.
//! - `400` with a parseable `{detail}` body → `CalcbotError::CalcRejected`
//!   (a domain rejection whose detail is shown to the user verbatim).
//! - Any other non-2xx status → `CalcbotError::ApiStatus`; network/timeout
//!   failures → `CalcbotError::Http`. Both are reported to users generically.
//!
//! ## Examples
//!
//! ```rust
//! let client = CalcClient::new("http://127.0.0.1:8000/api/v1", Duration::from_secs(5))?;
//! match client.calc(Operation::Div, 10.0, 0.0).await {
//!     Err(CalcbotError::CalcRejected { detail }) => println!("Ошибка: {}", detail),
//!     other => println!("{:?}", other),
//! }
//! ```
//!
use crate::commands::serve::handlers::{CalcRequest, CalcResponse, ErrorDetail};
use crate::core::error::CalcbotError;
use crate::core::math::Operation;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// # Calculator Client (`CalcClient`)
///
/// A `reqwest::Client` bound to the service base URL, with a per-request
/// timeout so a stalled service surfaces as a transport error rather than a
/// hung chat.
pub struct CalcClient {
    http: reqwest::Client,
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8000/api/v1`.
    base_url: String,
}

impl CalcClient {
    /// # Create Calculator Client (`new`)
    ///
    /// ## Arguments
    ///
    /// * `base_url`: The service base URL (a trailing slash is tolerated).
    /// * `timeout`: Per-request timeout.
    ///
    /// ## Returns
    ///
    /// * `Result<Self, CalcbotError>`: The client, or a transport error if
    ///   `reqwest` fails to construct one.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CalcbotError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint URL for one operation.
    fn endpoint(&self, op: Operation) -> String {
        format!("{}/{}", self.base_url, op.route())
    }

    /// # Calculate (`calc`)
    ///
    /// Posts `{a, b}` to the operation's endpoint and interprets the
    /// response per the service's error contract.
    ///
    /// ## Arguments
    ///
    /// * `op`: The operation to invoke.
    /// * `a`: The left operand.
    /// * `b`: The right operand.
    ///
    /// ## Returns
    ///
    /// * `Result<f64, CalcbotError>`: The computed value, a domain rejection
    ///   (`CalcRejected`), an unexpected status (`ApiStatus`), or a
    ///   transport failure (`Http`).
    pub async fn calc(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalcbotError> {
        let url = self.endpoint(op);
        debug!(%url, a, b, "calling calculator service");

        let response = self
            .http
            .post(&url)
            .json(&CalcRequest { a, b })
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            // A 400 carrying a JSON {detail} body is the service's domain
            // rejection (division by zero). A 400 without one (e.g. the
            // extractor's syntax-error rejection) is not; treat it like any
            // other unexpected status.
            if let Ok(body) = response.json::<ErrorDetail>().await {
                return Err(CalcbotError::CalcRejected {
                    detail: body.detail,
                });
            }
            return Err(CalcbotError::ApiStatus { status });
        }

        if !status.is_success() {
            return Err(CalcbotError::ApiStatus { status });
        }

        let body: CalcResponse = response.json().await?;
        Ok(body.result)
    }
}

// --- Unit Tests ---
