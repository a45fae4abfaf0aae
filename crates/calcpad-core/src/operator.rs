//! Operator symbols and their reduction table.

use std::fmt;

use crate::reducer::{self, ReduceError};

/// A reduction rule: folds the whole operand list into one value.
pub type Rule = fn(&[f32]) -> Result<f32, ReduceError>;

/// Every symbol the tokenizer treats as a delimiter.
pub const OPERATOR_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '%'];

/// An operator key on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Accepted as input, but has no reduction rule.
    Percent,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percent,
    ];

    /// Look up the operator for a keypad symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Percent),
            _ => None,
        }
    }

    /// The symbol written into the buffer for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Percent => '%',
        }
    }

    /// The reduction rule for this operator, or `None` when the operator is
    /// accepted on the keypad but has no defined semantics.
    pub fn rule(self) -> Option<Rule> {
        match self {
            Operator::Add => Some(reducer::sum),
            Operator::Subtract => Some(reducer::difference),
            Operator::Multiply => Some(reducer::product),
            Operator::Divide => Some(reducer::quotient),
            Operator::Percent => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether `c` is one of the operator delimiters.
pub fn is_operator_symbol(c: char) -> bool {
    OPERATOR_SYMBOLS.contains(&c)
}
