//! # CalcBot Chat Command Parsing & Rendering
//!
//! File: cli/src/commands/bot/commands.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module contains the pure text-processing half of the bot: turning an
//! incoming chat message into a `BotCommand` (or an immediate error reply),
//! and rendering replies back to the user. Nothing here performs I/O, which
//! keeps the whole command protocol unit-testable.
//!
//! ## Architecture
//!
//! - `parse_message`: message text → `ParseOutcome`. Unknown commands and
//!   non-command chatter are ignored; argument errors short-circuit into a
//!   ready-made reply so no service call is ever made for them.
//! - `parse_args`: the two-token `f64` argument grammar shared by all four
//!   calculation commands.
//! - `render_*` / `fmt_float`: reply formatting. Floats render the way the
//!   bot's users have always seen them: integral values keep one decimal
//!   place (`5` → `"5.0"`), everything else uses the shortest form.
//!
//! User-facing reply strings are in Russian, matching the bot's audience;
//! log messages and code stay in English.
//!
//! ## Examples
//!
//! ```rust
//! match parse_message("/add 2 3") {
//!     ParseOutcome::Command(BotCommand::Calc { op, a, b }) => {
//!         // op = Operation::Add, a = 2.0, b = 3.0
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
use crate::core::math::Operation;

/// Greeting and usage text for `/start` and `/help`.
const USAGE_TEXT: &str = "Привет! Я калькулятор-бот.\n\n\
    Доступные команды:\n\
    /add a b – сложение\n\
    /sub a b – вычитание\n\
    /mul a b – умножение\n\
    /div a b – деление\n\n\
    Например:\n\
    /add 2 3";

/// Reply for a wrong number of arguments.
pub const USAGE_ERROR_REPLY: &str = "Использование: /команда <a> <b>";

/// Reply for arguments that don't parse as numbers.
pub const TYPE_ERROR_REPLY: &str = "Аргументы <a> и <b> должны быть числами.";

/// Generic reply for service/network failures. Deliberately says nothing
/// about what actually went wrong; the log carries the detail.
pub const SERVER_ERROR_REPLY: &str = "⚠️ Ошибка сервера. Попробуйте позже.";

/// A fully parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BotCommand {
    /// `/start` or `/help`: answer with the usage text.
    Help,
    /// One of the four calculation commands with its parsed operands.
    Calc { op: Operation, a: f64, b: f64 },
}

/// The outcome of looking at one incoming message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseOutcome {
    /// A recognized command, ready to execute.
    Command(BotCommand),
    /// A recognized command with bad arguments: reply with this text and do
    /// not call the service.
    Reply(&'static str),
    /// Not a command for this bot; send no reply at all.
    Ignore,
}

/// # Parse Message (`parse_message`)
///
/// Classifies one incoming message. Only texts starting with `/` are
/// considered commands; a `@botname` suffix on the command (used in group
/// chats) is accepted and ignored. Unknown command names are ignored rather
/// than answered, matching how the bot has always behaved.
///
/// ## Arguments
///
/// * `text`: The raw message text.
///
/// ## Returns
///
/// * `ParseOutcome`: What to do with the message.
pub fn parse_message(text: &str) -> ParseOutcome {
    let mut parts = text.split_whitespace();

    let Some(first) = parts.next() else {
        return ParseOutcome::Ignore;
    };
    let Some(command) = first.strip_prefix('/') else {
        return ParseOutcome::Ignore;
    };
    // Group chats address commands as /add@calc_bot; drop the suffix.
    let command = command.split('@').next().unwrap_or(command);

    match command {
        "start" | "help" => ParseOutcome::Command(BotCommand::Help),
        name => match Operation::from_command(name) {
            Some(op) => {
                let tokens: Vec<&str> = parts.collect();
                match parse_args(&tokens) {
                    Ok((a, b)) => ParseOutcome::Command(BotCommand::Calc { op, a, b }),
                    Err(reply) => ParseOutcome::Reply(reply),
                }
            }
            None => ParseOutcome::Ignore,
        },
    }
}

/// # Parse Arguments (`parse_args`)
///
/// The argument grammar shared by all four calculation commands: exactly two
/// tokens, each parsing as `f64`. The error side is the exact reply text to
/// send, so callers never construct error messages themselves.
///
/// ## Arguments
///
/// * `tokens`: The whitespace-separated tokens following the command name.
///
/// ## Returns
///
/// * `Result<(f64, f64), &'static str>`: The parsed operands, or the reply
///   for a wrong token count / non-numeric token.
pub fn parse_args(tokens: &[&str]) -> Result<(f64, f64), &'static str> {
    let [a, b] = tokens else {
        return Err(USAGE_ERROR_REPLY);
    };

    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(TYPE_ERROR_REPLY),
    }
}

/// The static usage text answering `/start` and `/help`.
pub fn usage_text() -> &'static str {
    USAGE_TEXT
}

/// # Render Result (`render_result`)
///
/// Formats a successful calculation as `"{a} {symbol} {b} = {result}"`,
/// e.g. `"2.0 + 3.0 = 5.0"`.
pub fn render_result(op: Operation, a: f64, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        fmt_float(a),
        op.symbol(),
        fmt_float(b),
        fmt_float(result)
    )
}

/// # Render Rejection (`render_rejection`)
///
/// Formats a domain rejection from the service, passing the detail through
/// verbatim: `"Ошибка: division by zero"`.
pub fn render_rejection(detail: &str) -> String {
    format!("Ошибка: {}", detail)
}

/// # Format Float (`fmt_float`)
///
/// Renders an operand or result for a chat reply. Finite integral values
/// keep one decimal place so `5` reads as `"5.0"`; everything else uses the
/// default shortest rendering.
pub fn fmt_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

// --- Unit Tests ---

/// # Unit Tests for Command Parsing & Rendering
///
/// Covers the full command grammar, including the guarantees that bad input
/// is answered locally (so no service call can be made for it) and that
/// reply formatting matches what users have always received.
#[cfg(test)]
mod tests {
    use super::*;

    /// Two numeric tokens parse into a pair of floats.
    #[test]
    fn test_parse_args_valid() {
        assert_eq!(parse_args(&["5", "3"]), Ok((5.0, 3.0)));
        assert_eq!(parse_args(&["-2.5", "1e3"]), Ok((-2.5, 1000.0)));
    }

    /// A wrong token count is a usage error.
    #[test]
    fn test_parse_args_wrong_count() {
        assert_eq!(parse_args(&["5"]), Err(USAGE_ERROR_REPLY));
        assert_eq!(parse_args(&[]), Err(USAGE_ERROR_REPLY));
        assert_eq!(parse_args(&["1", "2", "3"]), Err(USAGE_ERROR_REPLY));
    }

    /// A non-numeric token is a type error.
    #[test]
    fn test_parse_args_not_numeric() {
        assert_eq!(parse_args(&["x", "3"]), Err(TYPE_ERROR_REPLY));
        assert_eq!(parse_args(&["1", "y"]), Err(TYPE_ERROR_REPLY));
    }

    /// Calculation commands parse into operation + operands.
    #[test]
    fn test_parse_message_calc() {
        assert_eq!(
            parse_message("/add 2 3"),
            ParseOutcome::Command(BotCommand::Calc {
                op: Operation::Add,
                a: 2.0,
                b: 3.0
            })
        );
        assert_eq!(
            parse_message("/div 10 0"),
            ParseOutcome::Command(BotCommand::Calc {
                op: Operation::Div,
                a: 10.0,
                b: 0.0
            })
        );
    }

    /// The group-chat `@botname` suffix is accepted and ignored.
    #[test]
    fn test_parse_message_with_bot_suffix() {
        assert_eq!(
            parse_message("/mul@calc_bot 4 5"),
            ParseOutcome::Command(BotCommand::Calc {
                op: Operation::Mul,
                a: 4.0,
                b: 5.0
            })
        );
    }

    /// `/start` and `/help` both map to the usage text.
    #[test]
    fn test_parse_message_help() {
        assert_eq!(parse_message("/start"), ParseOutcome::Command(BotCommand::Help));
        assert_eq!(parse_message("/help"), ParseOutcome::Command(BotCommand::Help));
    }

    /// Argument errors become immediate replies; the service is never
    /// involved.
    #[test]
    fn test_parse_message_argument_errors() {
        assert_eq!(parse_message("/add 5"), ParseOutcome::Reply(USAGE_ERROR_REPLY));
        assert_eq!(parse_message("/sub"), ParseOutcome::Reply(USAGE_ERROR_REPLY));
        assert_eq!(parse_message("/div x 3"), ParseOutcome::Reply(TYPE_ERROR_REPLY));
    }

    /// Non-commands and unknown commands are ignored.
    #[test]
    fn test_parse_message_ignored() {
        assert_eq!(parse_message("hello there"), ParseOutcome::Ignore);
        assert_eq!(parse_message(""), ParseOutcome::Ignore);
        assert_eq!(parse_message("/pow 2 3"), ParseOutcome::Ignore);
        assert_eq!(parse_message("/ADD 2 3"), ParseOutcome::Ignore);
    }

    /// Integral floats keep one decimal place; others use the short form.
    #[test]
    fn test_fmt_float() {
        assert_eq!(fmt_float(2.0), "2.0");
        assert_eq!(fmt_float(-1.0), "-1.0");
        assert_eq!(fmt_float(2.5), "2.5");
        assert_eq!(fmt_float(0.1), "0.1");
        assert_eq!(fmt_float(f64::INFINITY), "inf");
    }

    /// The success reply matches the documented shape exactly.
    #[test]
    fn test_render_result() {
        assert_eq!(
            render_result(Operation::Add, 2.0, 3.0, 5.0),
            "2.0 + 3.0 = 5.0"
        );
        assert_eq!(
            render_result(Operation::Div, 10.0, 4.0, 2.5),
            "10.0 / 4.0 = 2.5"
        );
    }

    /// The rejection reply passes the service detail through verbatim.
    #[test]
    fn test_render_rejection() {
        assert_eq!(
            render_rejection("division by zero"),
            "Ошибка: division by zero"
        );
    }

    /// The usage text names all four commands and the example invocation.
    #[test]
    fn test_usage_text_mentions_all_commands() {
        let text = usage_text();
        for command in ["/add", "/sub", "/mul", "/div"] {
            assert!(text.contains(command), "usage text missing {}", command);
        }
        assert!(text.contains("/add 2 3"));
    }
}
