use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation starts.
pub enum ParseError {
    /// The expression contains a character or token sequence that cannot be
    /// turned into a postfix sequence.
    InvalidExpression {
        /// What went wrong, for diagnostics.
        details: String,
    },
    /// A `(` without a matching `)`, or the other way round.
    UnbalancedParentheses,
    /// An assignment did not split into exactly two non-empty parts, or its
    /// right-hand side is neither a literal nor a known variable.
    InvalidAssignment,
    /// The left-hand side of an assignment is not made of letters only.
    InvalidIdentifier {
        /// The rejected name.
        name: String,
    },
    /// A line starting with `/` that names no built-in command.
    UnknownCommand {
        /// The command as typed.
        command: String,
    },
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidExpression { .. } | Self::UnbalancedParentheses => {
                ErrorKind::InvalidExpression
            },
            Self::InvalidAssignment => ErrorKind::InvalidAssignment,
            Self::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { .. } | Self::UnbalancedParentheses => {
                write!(f, "Invalid expression")
            },
            Self::InvalidAssignment => write!(f, "Invalid assignment"),
            Self::InvalidIdentifier { .. } => write!(f, "Invalid identifier"),
            Self::UnknownCommand { .. } => write!(f, "Unknown command"),
        }
    }
}

impl std::error::Error for ParseError {}
