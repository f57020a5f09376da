use num_bigint::BigInt;

use crate::{
    ast::{AssignedValue, Command, Statement},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::postfix::evaluate,
        lexer::tokenize,
        parser::{core::to_postfix, statement::parse_statement},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a successfully executed line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An expression or variable query evaluated to this value.
    Value(BigInt),
    /// An assignment succeeded.
    Assigned,
    /// `/help` was requested.
    Help,
    /// `/exit` was requested; the caller should stop reading input.
    Exit,
    /// The line was blank.
    Nothing,
}

/// Stores the state of one interactive session.
///
/// A `Session` owns the variable environment for as long as input keeps
/// coming. Every line is executed to completion before the next one; a line
/// that fails leaves the environment exactly as it was.
///
/// ## Usage
///
/// ```
/// use bigcalc::{Outcome, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.execute("x = 10").unwrap(), Outcome::Assigned);
/// assert_eq!(session.execute("x * x").unwrap(), Outcome::Value(100.into()));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Classifies and executes a single line of input.
    ///
    /// # Returns
    /// The [`Outcome`] of the line. Rendering it is left to the caller.
    ///
    /// # Errors
    /// Any [`ParseError`] or [`RuntimeError`] raised by the line, wrapped in
    /// [`Error`]. The session stays usable afterwards.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        match parse_statement(line)? {
            Statement::Empty => Ok(Outcome::Nothing),
            Statement::Command(Command::Help) => Ok(Outcome::Help),
            Statement::Command(Command::Exit) => Ok(Outcome::Exit),
            Statement::Assignment { name, value } => {
                self.assign(&name, value)?;
                Ok(Outcome::Assigned)
            },
            Statement::Query { name } => Ok(Outcome::Value(self.query(&name)?)),
            Statement::Expression { source } => {
                Ok(Outcome::Value(self.evaluate_expression(&source)?))
            },
        }
    }

    /// Stores the right-hand side of an assignment under `name`.
    ///
    /// A [`AssignedValue::Variable`] is copied from the current value of that
    /// variable; later changes to it are not tracked.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidAssignment`] if the right-hand side names
    /// a variable that does not exist. Nothing is stored in that case.
    pub fn assign(&mut self, name: &str, value: AssignedValue) -> Result<(), ParseError> {
        let value = match value {
            AssignedValue::Literal(value) => value,
            AssignedValue::Variable(source) => self.environment
                                                   .lookup(&source)
                                                   .cloned()
                                                   .ok_or(ParseError::InvalidAssignment)?,
        };

        self.environment.assign(name, value);
        Ok(())
    }

    /// Returns the value of a single variable.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if `name` was never assigned.
    pub fn query(&self, name: &str) -> EvalResult<BigInt> {
        self.environment
            .lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Runs an expression through the full pipeline: tokenize, convert to
    /// postfix, evaluate.
    ///
    /// The environment is only read, so evaluating the same expression twice
    /// gives the same answer.
    ///
    /// # Errors
    /// Any error from [`tokenize`], [`to_postfix`] or [`evaluate`].
    ///
    /// # Example
    /// ```
    /// use bigcalc::{Session, error::ErrorKind};
    ///
    /// let session = Session::new();
    /// assert_eq!(session.evaluate_expression("5---2").unwrap(), 3.into());
    /// assert_eq!(session.evaluate_expression("5--2").unwrap(), 7.into());
    /// assert_eq!(session.evaluate_expression("a + 1").unwrap_err().kind(),
    ///            ErrorKind::UnknownVariable);
    /// ```
    pub fn evaluate_expression(&self, source: &str) -> Result<BigInt, Error> {
        let tokens = tokenize(source)?;
        let postfix = to_postfix(tokens)?;

        Ok(evaluate(&postfix, &self.environment)?)
    }
}
