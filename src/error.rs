/// Parsing errors.
///
/// Defines all error types that can occur while classifying a line,
/// tokenizing an expression, converting it to postfix, or resolving an
/// assignment. Parse errors are detected before any arithmetic happens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised while reducing a postfix sequence, such as
/// division by zero, unknown variables, or a stack left with the wrong number
/// of operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The broad category of a failure, independent of the phase that raised it.
///
/// Both [`ParseError`] and [`RuntimeError`] can report a malformed expression;
/// `ErrorKind` folds such cases together so callers can classify any error
/// with a single `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed tokens, unbalanced parentheses, or wrong operand arity.
    InvalidExpression,
    /// An identifier was read before it was assigned.
    UnknownVariable,
    /// Integer division by zero.
    DivisionByZero,
    /// A malformed assignment statement.
    InvalidAssignment,
    /// The left-hand side of an assignment is not purely alphabetic.
    InvalidIdentifier,
    /// A `/command` that does not exist.
    UnknownCommand,
}

#[derive(Debug)]
/// Any error produced while executing a single input line.
pub enum Error {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The line parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use bigcalc::{Session, error::ErrorKind};
    ///
    /// let mut session = Session::new();
    /// let err = session.execute("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
