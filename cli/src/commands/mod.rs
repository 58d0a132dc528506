//! # CalcBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the CalcBot
//! CLI. It serves as the central point for importing and re-exporting
//! command modules to make them accessible to the main application entry
//! point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Each top-level command (`serve`, `bot`) is a module defining its own
//!   arguments structure and handler function
//! - Implementation details live in submodules within each command's
//!   directory (config, handlers, clients, ...)
//!
//! ## Command Groups
//!
//! - `serve`: The arithmetic HTTP service
//! - `bot`: The Telegram command relay
//!

/// Command running the Telegram relay bot. Includes configuration, the
/// Telegram/service clients, and the chat command grammar.
pub mod bot;
/// Command running the arithmetic HTTP service. Includes configuration,
/// handlers, and server lifecycle.
pub mod serve;

// Note regarding submodule declarations:
// Submodules (like `config` within `serve`, or `telegram` within `bot`)
// are declared within their respective parent module's `mod.rs` file.
// They are *not* declared here at the top level of the `commands` module.
