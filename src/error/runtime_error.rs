use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator found fewer than two operands on the stack.
    MissingOperand {
        /// The operator that could not be applied.
        operator: char,
    },
    /// A token that has no meaning in a postfix sequence, such as `(`.
    UnexpectedToken {
        /// The offending token.
        token: String,
    },
    /// The stack did not hold exactly one value once the sequence was
    /// consumed.
    LeftoverOperands {
        /// How many values were left.
        count: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::MissingOperand { .. }
            | Self::UnexpectedToken { .. }
            | Self::LeftoverOperands { .. } => {
                ErrorKind::InvalidExpression
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { .. } => write!(f, "Unknown variable"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::MissingOperand { .. }
            | Self::UnexpectedToken { .. }
            | Self::LeftoverOperands { .. } => {
                write!(f, "Invalid expression")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
