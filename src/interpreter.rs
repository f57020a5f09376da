/// The environment module holds the session's variables.
///
/// Variables map case-sensitive, letters-only names to arbitrary-precision
/// integers. They are written only by assignments and read by the evaluator.
pub mod environment;
/// The evaluator module reduces postfix sequences and runs whole lines.
///
/// It contains the postfix stack machine, the arithmetic for each operator,
/// and the [`Session`](evaluator::core::Session) that ties every phase
/// together.
///
/// # Responsibilities
/// - Applies `+`, `-`, `*` and `/` to big integers.
/// - Resolves identifiers against the environment.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer strips whitespace, folds runs of `+` and `-`, and produces a
/// stream of numbers, identifiers, operators and parentheses. This is the
/// first stage of expression evaluation.
pub mod lexer;
/// The parser module classifies lines and orders tokens for evaluation.
///
/// # Responsibilities
/// - Splits input into commands, assignments, queries and expressions.
/// - Converts infix token sequences to postfix with the shunting-yard
///   algorithm.
/// - Detects unbalanced parentheses and malformed assignments.
pub mod parser;
