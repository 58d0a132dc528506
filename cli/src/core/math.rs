//! # CalcBot Arithmetic Engine
//!
//! File: cli/src/core/math.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module implements the arithmetic core shared by the HTTP service and
//! the Telegram bot: the four binary operations (`add`, `sub`, `mul`, `div`)
//! and the `Operation` enum that names them. Everything here is pure and
//! stateless; no I/O happens below this line.
//!
//! ## Architecture
//!
//! The module has two halves:
//! - Free functions implementing the arithmetic itself. Only `div` is
//!   fallible: an exact-zero divisor produces `MathError::DivisionByZero`.
//! - The `Operation` enum, which maps each operation to its API route
//!   segment, its chat command name, its infix symbol, and (via `handler`)
//!   the function that computes it. The mapping is a static lookup table,
//!   not dynamic dispatch.
//!
//! ## Examples
//!
//! Dispatching an operation by name:
//!
//! ```rust
//! let op = Operation::from_command("div").unwrap();
//! match op.apply(10.0, 0.0) {
//!     Ok(result) => println!("10 {} 0 = {}", op.symbol(), result),
//!     Err(e) => println!("rejected: {}", e), // "rejected: division by zero"
//! }
//! ```
//!
use thiserror::Error;

/// Domain error for arithmetic operations.
///
/// Only division can fail, and only on an exact-zero divisor. Non-finite
/// inputs and results (NaN, ±infinity) pass through as ordinary values with
/// standard IEEE 754 semantics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The divisor was exactly zero. The display text is the `detail`
    /// message the service returns to clients.
    #[error("division by zero")]
    DivisionByZero,
}

/// Signature shared by all four binary operations in the dispatch table.
pub type BinaryOp = fn(f64, f64) -> Result<f64, MathError>;

/// Adds two numbers. Never fails.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts `b` from `a`. Never fails.
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers. Never fails.
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// # Divide (`div`)
///
/// Divides `a` by `b`, rejecting an exact-zero divisor.
///
/// The zero check uses `==`, so `-0.0` is rejected too (it compares equal to
/// zero). Any nonzero divisor succeeds, including denormals whose quotient
/// overflows to infinity; the caller receives whatever IEEE 754 produces.
///
/// ## Arguments
///
/// * `a`: The dividend.
/// * `b`: The divisor.
///
/// ## Returns
///
/// * `Result<f64, MathError>`: The quotient, or `MathError::DivisionByZero`
///   when `b == 0.0`.
pub fn div(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// # Operation (`Operation`)
///
/// The fixed set of arithmetic operations the service and the bot support.
///
/// Each variant knows its API route segment (`"add"`, ...), its chat command
/// name (identical to the route segment), and its human-readable infix
/// symbol. `apply` routes through a static variant-to-function table so that
/// both components share one dispatch mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`a + b`).
    Add,
    /// Subtraction (`a - b`).
    Sub,
    /// Multiplication (`a * b`).
    Mul,
    /// Division (`a / b`), fallible on a zero divisor.
    Div,
}

impl Operation {
    /// All operations, in route order. Used to build the service router.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// # Operation from Command Name (`from_command`)
    ///
    /// Looks up an operation by its chat command / route name.
    ///
    /// ## Arguments
    ///
    /// * `name`: The lowercase command name without any leading slash
    ///   (e.g. `"add"`).
    ///
    /// ## Returns
    ///
    /// * `Option<Operation>`: The matching operation, or `None` for anything
    ///   outside the fixed set.
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operation::Add),
            "sub" => Some(Operation::Sub),
            "mul" => Some(Operation::Mul),
            "div" => Some(Operation::Div),
            _ => None,
        }
    }

    /// The route segment for this operation under `/api/v1/` (also its chat
    /// command name).
    pub fn route(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// The infix symbol used when rendering results back to the user.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        }
    }

    /// # Operation Handler (`handler`)
    ///
    /// The static lookup table from operation to function reference. The
    /// infallible operations are wrapped so every entry shares the
    /// `BinaryOp` signature; `div` is the only entry that can return an
    /// error.
    ///
    /// ## Returns
    ///
    /// * `BinaryOp`: The function implementing this operation.
    fn handler(self) -> BinaryOp {
        match self {
            Operation::Add => |a, b| Ok(add(a, b)),
            Operation::Sub => |a, b| Ok(sub(a, b)),
            Operation::Mul => |a, b| Ok(mul(a, b)),
            Operation::Div => div,
        }
    }

    /// # Apply Operation (`apply`)
    ///
    /// Runs this operation on the given operands via the dispatch table.
    ///
    /// ## Arguments
    ///
    /// * `a`: The left operand.
    /// * `b`: The right operand.
    ///
    /// ## Returns
    ///
    /// * `Result<f64, MathError>`: The computed value, or the domain error
    ///   from a fallible operation (`div` by zero).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, MathError> {
        (self.handler())(a, b)
    }
}

// --- Unit Tests ---
