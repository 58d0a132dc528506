//! # CalcBot CLI Bot Integration Tests
//!
//! File: cli/tests/bot.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! Integration tests for the `calcbot bot` subcommand, which runs the
//! Telegram relay.
//!
//! **Note:** The bot immediately starts long-polling Telegram, so these
//! tests only exercise the configuration boundary: the credential must be
//! present and non-empty before any network activity happens. The relay
//! logic itself (command grammar, error mapping, reply rendering) is
//! covered in-process by the unit tests in `commands::bot`.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;

/// # Test Bot Help (`test_bot_help`)
///
/// Verifies that `calcbot bot --help` succeeds and documents the token's
/// environment variable and the service URL flag.
#[test]
fn test_bot_help() {
    calcbot_cmd()
        .args(["bot", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TELEGRAM_BOT_TOKEN"))
        .stdout(predicate::str::contains("--api-url"));
}

/// # Test Bot Missing Token (`test_bot_missing_token`)
///
/// Verifies that running the bot without `TELEGRAM_BOT_TOKEN` (and without
/// `--token`) fails with a clear argument error and never starts polling.
#[test]
fn test_bot_missing_token() {
    calcbot_cmd()
        .arg("bot")
        .env_remove("TELEGRAM_BOT_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

/// # Test Bot Empty Token (`test_bot_empty_token`)
///
/// Verifies that an empty `TELEGRAM_BOT_TOKEN` is rejected by configuration
/// validation with a pointer at the environment variable.
#[test]
fn test_bot_empty_token() {
    calcbot_cmd()
        .arg("bot")
        .env("TELEGRAM_BOT_TOKEN", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"));
}
