/// Session state and line execution.
///
/// Owns the variable environment and runs each classified statement against
/// it.
pub mod core;

/// Postfix reduction.
///
/// Walks a postfix sequence with an operand stack and produces the final
/// value.
pub mod postfix;

/// Binary operator evaluation.
///
/// Applies a single arithmetic operator to two big integers.
pub mod binary;
