use num_bigint::BigInt;

use crate::{
    ast::{AssignedValue, Command, Statement},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Classifies a single input line.
///
/// The line is trimmed and then checked in this order:
/// - empty: [`Statement::Empty`].
/// - starts with `/`: a built-in command.
/// - contains `=`: an assignment.
/// - letters only: a variable query.
/// - anything else: an expression, left untouched for the tokenizer.
///
/// # Parameters
/// - `line`: One raw line of input.
///
/// # Returns
/// The classified [`Statement`].
///
/// # Errors
/// - [`ParseError::UnknownCommand`] for an unrecognised `/command`.
/// - Any error from [`parse_assignment`].
///
/// # Example
/// ```
/// use bigcalc::{
///     ast::{AssignedValue, Statement},
///     interpreter::parser::statement::parse_statement,
/// };
///
/// assert_eq!(parse_statement("  n = 12 ").unwrap(),
///            Statement::Assignment { name:  "n".to_string(),
///                                    value: AssignedValue::Literal(12.into()), });
/// assert_eq!(parse_statement("n").unwrap(),
///            Statement::Query { name: "n".to_string() });
/// assert!(parse_statement("/quit").is_err());
/// ```
pub fn parse_statement(line: &str) -> ParseResult<Statement> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Statement::Empty);
    }
    if line.starts_with('/') {
        return parse_command(line).map(Statement::Command);
    }
    if line.contains('=') {
        return parse_assignment(line);
    }
    if is_identifier(line) {
        return Ok(Statement::Query { name: line.to_string() });
    }

    Ok(Statement::Expression { source: line.to_string() })
}

fn parse_command(line: &str) -> ParseResult<Command> {
    match line {
        "/help" => Ok(Command::Help),
        "/exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand { command: line.to_string() }),
    }
}

/// Parses an assignment of the form `name = value`.
///
/// The line must split on `=` into exactly two parts, both non-empty once
/// trimmed. The left part must be an identifier. The right part is read as an
/// integer literal if it looks like one, otherwise as the name of another
/// variable. Whether that variable exists is only known at execution time.
///
/// # Errors
/// - [`ParseError::InvalidAssignment`] if there are not exactly two non-empty
///   parts, or the right part is neither a literal nor an identifier.
/// - [`ParseError::InvalidIdentifier`] if the left part is not letters only.
pub fn parse_assignment(line: &str) -> ParseResult<Statement> {
    let parts: Vec<&str> = line.split('=').map(str::trim).collect();

    let [name, value] = parts.as_slice() else {
        return Err(ParseError::InvalidAssignment);
    };
    if name.is_empty() || value.is_empty() {
        return Err(ParseError::InvalidAssignment);
    }
    if !is_identifier(name) {
        return Err(ParseError::InvalidIdentifier { name: (*name).to_string() });
    }

    let value = if let Some(literal) = parse_literal(value) {
        AssignedValue::Literal(literal)
    } else if is_identifier(value) {
        AssignedValue::Variable((*value).to_string())
    } else {
        return Err(ParseError::InvalidAssignment);
    };

    Ok(Statement::Assignment { name: (*name).to_string(),
                               value })
}

/// Returns `true` if `text` is a non-empty run of ASCII letters.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses an optionally signed run of ASCII digits, such as `-42` or `+7`.
///
/// Returns `None` for anything else, including digit separators and
/// whitespace.
#[must_use]
pub fn parse_literal(text: &str) -> Option<BigInt> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude: BigInt = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
