//! Reducer: folds the full operand list with one operator's rule.
//!
//! Every operator press reduces the *entire* current operand list, not just
//! the last two operands. Folds run left to right in single precision and the
//! result is not rounded.

use tracing::debug;

use crate::operator::Operator;

/// Why a reduction could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operator {0:?}")]
    UnsupportedOperator(char),

    #[error("no operands to reduce with {0}")]
    EmptyOperands(Operator),

    /// The fold overflowed `f32` or produced NaN.
    #[error("result out of range")]
    OutOfRange,
}

/// Reduce `operands` with the rule of `op`.
pub fn reduce(op: Operator, operands: &[f32]) -> Result<f32, ReduceError> {
    let rule = op
        .rule()
        .ok_or(ReduceError::UnsupportedOperator(op.symbol()))?;
    let result = rule(operands)?;
    if !result.is_finite() {
        return Err(ReduceError::OutOfRange);
    }
    debug!(operator = %op, ?operands, result, "reduced operands");
    Ok(result)
}

/// Reduce with a raw keypad symbol. Symbols outside the operator table fail
/// the same way `%` does.
pub fn reduce_symbol(symbol: char, operands: &[f32]) -> Result<f32, ReduceError> {
    let op = Operator::from_symbol(symbol).ok_or(ReduceError::UnsupportedOperator(symbol))?;
    reduce(op, operands)
}

pub(crate) fn sum(operands: &[f32]) -> Result<f32, ReduceError> {
    Ok(operands.iter().sum())
}

pub(crate) fn difference(operands: &[f32]) -> Result<f32, ReduceError> {
    let (first, rest) = operands
        .split_first()
        .ok_or(ReduceError::EmptyOperands(Operator::Subtract))?;
    Ok(rest.iter().fold(*first, |acc, value| acc - value))
}

pub(crate) fn product(operands: &[f32]) -> Result<f32, ReduceError> {
    Ok(operands.iter().fold(1.0, |acc, value| acc * value))
}

pub(crate) fn quotient(operands: &[f32]) -> Result<f32, ReduceError> {
    let (first, rest) = operands
        .split_first()
        .ok_or(ReduceError::EmptyOperands(Operator::Divide))?;
    rest.iter().try_fold(*first, |acc, &divisor| {
        if divisor == 0.0 {
            Err(ReduceError::DivisionByZero)
        } else {
            Ok(acc / divisor)
        }
    })
}
