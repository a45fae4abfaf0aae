#![deny(unsafe_code)]

//! Calcpad core: the incremental expression evaluator.
//!
//! A calculator whose whole state is a text buffer. Digits and edits change
//! the buffer directly; every operator press re-tokenizes the entire buffer
//! and folds all of its operands with that operator, left to right, with no
//! precedence and no parentheses. The UI collaborator only forwards
//! [`Event`]s and renders [`Calculator::buffer`].

/// Buffer controller: the keystroke state machine.
pub mod controller;
/// Keystroke events forwarded by the UI.
pub mod event;
/// In-memory log collector for the terminal keypad.
pub mod logging;
/// Operator symbols and their reduction table.
pub mod operator;
/// Left-to-right reduction of an operand list.
pub mod reducer;
/// Single-writer event dispatch over tokio channels.
pub mod service;
/// Splitting the buffer into operands and operators.
pub mod tokenizer;

pub use controller::{CalcState, Calculator, Diagnostics};
pub use event::Event;
pub use logging::{LogCollector, LogReader};
pub use operator::Operator;
pub use reducer::{ReduceError, reduce, reduce_symbol};
pub use service::{CalculatorHandle, CalculatorService, DisplayUpdate, ServiceError};
pub use tokenizer::{Classified, Token, tokenize};
