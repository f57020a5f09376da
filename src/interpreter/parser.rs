/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over the token stream produced by
/// the lexer, checking parenthesis balance on the way.
pub mod core;

/// Line classification.
///
/// Decides whether a line is a command, an assignment, a variable query or an
/// expression, and resolves the pieces of an assignment.
pub mod statement;
