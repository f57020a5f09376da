use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies `op` to `left` and `right`.
///
/// Division truncates toward zero, so `-7 / 2` is `-3`.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when dividing by zero.
///
/// # Example
/// ```
/// use bigcalc::{ast::Operator, interpreter::evaluator::binary::apply_operator};
///
/// let quotient = apply_operator(Operator::Div, (-7).into(), 2.into()).unwrap();
/// assert_eq!(quotient, (-3).into());
/// assert!(apply_operator(Operator::Div, 1.into(), 0.into()).is_err());
/// ```
pub fn apply_operator(op: Operator, left: BigInt, right: BigInt) -> EvalResult<BigInt> {
    Ok(match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
    })
}
