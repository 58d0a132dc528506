//! # CalcBot Arithmetic Service Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module defines the JSON request/response types of the arithmetic API
//! and the axum handler for each of the four operations. Handlers are thin:
//! deserialize, delegate to the `Operation` dispatch table, wrap the result.
//!
//! ## Architecture
//!
//! - `CalcRequest` / `CalcResponse`: The per-request DTOs. Nothing outlives
//!   a single request/response cycle.
//! - `ErrorDetail` / `ApiError`: The structured domain-error response
//!   (`400 {"detail": ...}`). Structural validation never reaches this type:
//!   a body that fails to deserialize into `CalcRequest` is rejected by the
//!   `Json` extractor itself (422 for well-formed JSON with missing or
//!   mistyped fields, 400 for syntactically invalid JSON) before any
//!   operation runs.
//! - One `handle_*` function per route, all funneling through `calculate`.
//!
//! ## Examples
//!
//! ```bash
//! curl -X POST http://127.0.0.1:8000/api/v1/div \
//!      -H 'Content-Type: application/json' \
//!      -d '{"a": 10, "b": 4}'
//! # => {"result":2.5}
//!
//! curl -X POST http://127.0.0.1:8000/api/v1/div \
//!      -H 'Content-Type: application/json' \
//!      -d '{"a": 10, "b": 0}'
//! # => 400 {"detail":"division by zero"}
//! ```
//!
use crate::core::math::{MathError, Operation};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single calculation request: two double-precision operands.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct CalcRequest {
    /// The left operand.
    pub a: f64,
    /// The right operand.
    pub b: f64,
}

/// A successful calculation response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct CalcResponse {
    /// The computed value.
    pub result: f64,
}

/// Body of a structured error response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    /// Human-readable description of why the request was rejected.
    pub detail: String,
}

/// # API Error (`ApiError`)
///
/// Domain errors surfaced by the arithmetic API. The service never recovers
/// an error locally; it always renders it as a structured HTTP response.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The operation rejected its inputs (division by zero). Rendered as
    /// `400 {"detail": <message>}`.
    BadRequest(String),
}

impl From<MathError> for ApiError {
    fn from(e: MathError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDetail { detail })).into_response()
            }
        }
    }
}

/// # Calculate (`calculate`)
///
/// Shared body of all four handlers: applies the operation to the request's
/// operands via the dispatch table and wraps the outcome.
///
/// ## Arguments
///
/// * `op`: The operation selected by the route.
/// * `req`: The deserialized request body.
///
/// ## Returns
///
/// * `Result<Json<CalcResponse>, ApiError>`: The JSON result, or the
///   structured domain error for a zero divisor.
fn calculate(op: Operation, req: CalcRequest) -> Result<Json<CalcResponse>, ApiError> {
    let result = op.apply(req.a, req.b)?;
    debug!(op = op.route(), a = req.a, b = req.b, result, "calculated");
    Ok(Json(CalcResponse { result }))
}

/// Handler for `POST /api/v1/add`.
pub async fn handle_add(Json(req): Json<CalcRequest>) -> Result<Json<CalcResponse>, ApiError> {
    calculate(Operation::Add, req)
}

/// Handler for `POST /api/v1/sub`.
pub async fn handle_sub(Json(req): Json<CalcRequest>) -> Result<Json<CalcResponse>, ApiError> {
    calculate(Operation::Sub, req)
}

/// Handler for `POST /api/v1/mul`.
pub async fn handle_mul(Json(req): Json<CalcRequest>) -> Result<Json<CalcResponse>, ApiError> {
    calculate(Operation::Mul, req)
}

/// Handler for `POST /api/v1/div`.
pub async fn handle_div(Json(req): Json<CalcRequest>) -> Result<Json<CalcResponse>, ApiError> {
    calculate(Operation::Div, req)
}

// --- Unit Tests ---
