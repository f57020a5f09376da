//! # bigcalc
//!
//! bigcalc is an interactive calculator over arbitrary-precision integers.
//! It evaluates infix expressions with `+`, `-`, `*`, `/` and parentheses, and
//! keeps named variables for the length of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the shapes that input lines are classified into.
///
/// This module declares the arithmetic [`Operator`](ast::Operator) with its
/// precedence, and the [`Statement`](ast::Statement) enum describing a
/// classified line: a command, an assignment, a variable query or an
/// expression.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while classifying,
/// tokenizing, converting or evaluating a line. Each error renders as the
/// short message shown to the user, and [`Error::kind`](error::Error::kind)
/// classifies it.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together the lexer, the postfix converter, the evaluator
/// and the variable environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and
///   environment.
/// - Provides entry points for evaluating single lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use interpreter::evaluator::core::{Outcome, Session};

use crate::error::Error;

/// Text printed for the `/help` command.
pub const HELP_TEXT: &str = "\
This calculator supports the following operators:
+ : addition
- : subtraction
* : multiplication
/ : integer division
( ) : parentheses for grouping
You can use variables (e.g., a, b) and assign values to them (e.g., a = 5)";

/// Message printed in response to `/exit`.
pub const GOODBYE: &str = "Bye!";

/// Runs every line of `source` through one session and returns what an
/// interactive session would have printed, in order.
///
/// Printable output is returned as `Ok`: values in decimal, `/help` as
/// [`HELP_TEXT`] and `/exit` as [`GOODBYE`]. Failed lines are returned as
/// `Err` so callers can route them to a separate stream. Assignments and blank
/// lines produce nothing. Processing stops after `/exit`. A failing line never
/// stops the script.
///
/// In pipe mode only the last value is kept; everything else, errors
/// included, is dropped.
///
/// # Examples
/// ```
/// use bigcalc::{error::ErrorKind, run_script};
///
/// let transcript = run_script("a = 4\nb = a\na * b - 1\nc\n/exit\n99", false);
/// assert_eq!(transcript.len(), 3);
/// assert_eq!(transcript[0].as_deref().ok(), Some("15"));
/// assert_eq!(transcript[1].as_ref().unwrap_err().kind(), ErrorKind::UnknownVariable);
/// assert_eq!(transcript[2].as_deref().ok(), Some("Bye!"));
///
/// let last = run_script("1 + 1\n2 * 21\n7 / 0", true);
/// assert_eq!(last.len(), 1);
/// assert_eq!(last[0].as_deref().ok(), Some("42"));
/// ```
#[must_use]
pub fn run_script(source: &str, pipe_mode: bool) -> Vec<Result<String, Error>> {
    let mut session = Session::new();
    let mut transcript = Vec::new();
    let mut last_value = None;

    for line in source.lines() {
        match session.execute(line) {
            Ok(Outcome::Value(value)) => {
                let rendered = value.to_string();
                transcript.push(Ok(rendered.clone()));
                last_value = Some(rendered);
            },
            Ok(Outcome::Help) => transcript.push(Ok(HELP_TEXT.to_string())),
            Ok(Outcome::Exit) => {
                transcript.push(Ok(GOODBYE.to_string()));
                break;
            },
            Ok(Outcome::Assigned | Outcome::Nothing) => {},
            Err(e) => transcript.push(Err(e)),
        }
    }

    if pipe_mode {
        return last_value.into_iter().map(Ok).collect();
    }
    transcript
}
