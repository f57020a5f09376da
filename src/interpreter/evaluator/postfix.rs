use num_bigint::BigInt;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::apply_operator, core::EvalResult},
        lexer::Token,
    },
};

/// Reduces a postfix sequence to a single value.
///
/// Operands are pushed onto a stack; each operator pops its right operand and
/// then its left operand and pushes the result. Identifiers are resolved
/// against `env`, which is only read.
///
/// # Parameters
/// - `postfix`: Tokens in Reverse Polish order, as produced by
///   [`to_postfix`](crate::interpreter::parser::core::to_postfix).
/// - `env`: The variables visible to the expression.
///
/// # Errors
/// - [`RuntimeError::UnknownVariable`] for an unassigned identifier.
/// - [`RuntimeError::MissingOperand`] when an operator finds fewer than two
///   values on the stack.
/// - [`RuntimeError::LeftoverOperands`] unless exactly one value remains.
/// - [`RuntimeError::DivisionByZero`] from `/`.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{
///     environment::Environment,
///     evaluator::postfix::evaluate,
///     lexer::tokenize,
///     parser::core::to_postfix,
/// };
///
/// let mut env = Environment::new();
/// env.assign("x", 10.into());
///
/// let postfix = to_postfix(tokenize("x * (x - 4)").unwrap()).unwrap();
/// assert_eq!(evaluate(&postfix, &env).unwrap(), 60.into());
/// ```
pub fn evaluate(postfix: &[Token], env: &Environment) -> EvalResult<BigInt> {
    let mut stack: Vec<BigInt> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(value.clone()),
            Token::Identifier(name) => {
                let value = env.lookup(name)
                               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?;
                stack.push(value.clone());
            },
            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::MissingOperand { operator: op.symbol() });
                };
                stack.push(apply_operator(*op, left, right)?);
            },
            // Parentheses never survive conversion to postfix.
            Token::LParen | Token::RParen => {
                return Err(RuntimeError::UnexpectedToken { token: token.to_string() });
            },
        }
    }

    match (stack.pop(), stack.len()) {
        (Some(result), 0) => Ok(result),
        (None, _) => Err(RuntimeError::LeftoverOperands { count: 0 }),
        (Some(_), rest) => Err(RuntimeError::LeftoverOperands { count: rest + 1 }),
    }
}
