use num_bigint::BigInt;

/// A binary arithmetic operator.
///
/// Every operator is left-associative. Binding strength is given by
/// [`Operator::precedence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, integer division truncating toward zero.
    Div,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// `+` and `-` bind with `1`, `*` and `/` with `2`. A higher number binds
    /// tighter.
    ///
    /// # Example
    /// ```
    /// use bigcalc::ast::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A built-in command, written with a leading `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/help`
    Help,
    /// `/exit`
    Exit,
}

/// A single classified input line.
///
/// Lines are classified once by
/// [`parse_statement`](crate::interpreter::parser::statement::parse_statement)
/// and then executed by the session without looking at the raw text again,
/// except for expressions which still have to go through the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A blank line.
    Empty,
    /// A built-in command such as `/help`.
    Command(Command),
    /// `name = value`, where the right-hand side is already resolved to either
    /// a literal or another variable.
    Assignment {
        /// The variable being written.
        name:  String,
        /// The right-hand side of the assignment.
        value: AssignedValue,
    },
    /// A bare identifier whose value should be printed.
    Query {
        /// The variable being read.
        name: String,
    },
    /// Anything else, handed to the expression pipeline.
    Expression {
        /// The raw expression text.
        source: String,
    },
}

/// The right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignedValue {
    /// An integer literal such as `-42`.
    Literal(BigInt),
    /// The name of another variable, looked up when the assignment runs.
    Variable(String),
}
