//! # CalcBot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `calcbot` command-line interface, such as handling standard flags
//! like `--version` and `--help`, and listing the available subcommands.
//!

// Declare and use the common module for helpers like `calcbot_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

/// # Test Help Flag (`test_help_flag`)
///
/// Verifies that `calcbot --help` succeeds and lists both subcommands.
#[test]
fn test_help_flag() {
    calcbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("bot"));
}

/// # Test Version Flag (`test_version_flag`)
///
/// Verifies that `calcbot --version` reports the crate version.
#[test]
fn test_version_flag() {
    calcbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// # Test Unknown Subcommand (`test_unknown_subcommand`)
///
/// Verifies that an unknown subcommand fails with a usage error rather than
/// silently doing nothing.
#[test]
fn test_unknown_subcommand() {
    calcbot_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("usage")));
}
