//! Buffer controller: the only mutable state in the calculator.
//!
//! [`Calculator`] owns the text buffer, applies edit events to it, and runs
//! the tokenizer and reducer whenever an operator is pressed. Operands are
//! always re-derived from the buffer; nothing but the pending operator
//! survives between keystrokes.
//!
//! After a successful evaluation the buffer shows the result and the pressed
//! operator stays pending. The next digit re-inserts that operator before
//! itself, so `1 0 + 5 +` reads `10`, then `10+5`, then `15`.

use calcpad_config::DisplayConfig;
use tracing::{trace, warn};

use crate::event::Event;
use crate::operator::{Operator, is_operator_symbol};
use crate::reducer::{self, ReduceError};
use crate::tokenizer;

const EMPTY_BUFFER: &str = "0";

/// Whether the buffer holds a number or an error marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalcState {
    #[default]
    Idle,
    /// The buffer shows the error marker. The next digit starts a fresh
    /// number; any other event except ToggleSign resets the buffer to `0`.
    Error,
}

/// Counters for outcomes that never surface in the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Reductions attempted.
    pub evaluations: u64,
    /// Reductions that ended in the error marker.
    pub failures: u64,
    /// Tokens dropped because they were neither numbers nor operators.
    pub discarded_tokens: u64,
}

/// The keystroke-driven calculator.
#[derive(Debug, Clone)]
pub struct Calculator {
    buffer: String,
    state: CalcState,
    pending: Option<Operator>,
    error_marker: String,
    detailed_errors: bool,
    diagnostics: Diagnostics,
}

impl Calculator {
    /// A calculator with the default display settings.
    pub fn new() -> Self {
        Self::with_config(&DisplayConfig::default())
    }

    /// A calculator using the given display settings.
    pub fn with_config(display: &DisplayConfig) -> Self {
        Self {
            buffer: EMPTY_BUFFER.to_string(),
            state: CalcState::Idle,
            pending: None,
            error_marker: display.error_marker.clone(),
            detailed_errors: display.detailed_errors,
            diagnostics: Diagnostics::default(),
        }
    }

    /// The text the collaborator should render.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    /// The operator waiting to be re-inserted before the next digit.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Apply one keystroke and return the resulting buffer.
    pub fn handle(&mut self, event: Event) -> &str {
        match event {
            Event::Digit(digit) if digit.is_ascii_digit() => self.push_numeric(digit),
            Event::Digit(other) => warn!(symbol = %other, "ignoring non-digit symbol"),
            Event::DecimalPoint => self.push_numeric('.'),
            Event::Clear => self.reset(),
            Event::Delete => self.delete(),
            Event::ToggleSign => self.toggle_sign(),
            Event::Operator(op) => self.apply_operator(op),
        }
        trace!(?event, buffer = %self.buffer, state = ?self.state, "handled keystroke");
        &self.buffer
    }

    /// Back to the initial `0` buffer with nothing pending.
    fn reset(&mut self) {
        self.buffer.clear();
        self.buffer.push_str(EMPTY_BUFFER);
        self.state = CalcState::Idle;
        self.pending = None;
    }

    fn push_numeric(&mut self, symbol: char) {
        if self.state == CalcState::Error {
            self.reset();
            if symbol != '.' {
                self.buffer = symbol.to_string();
                return;
            }
        }

        if let Some(op) = self.pending.take() {
            self.buffer.push(op.symbol());
        }

        if symbol == '.' && self.current_run().contains('.') {
            return;
        }

        if self.buffer == EMPTY_BUFFER && symbol != '.' {
            self.buffer = symbol.to_string();
        } else {
            self.buffer.push(symbol);
        }
    }

    /// The text after the last operator symbol.
    fn current_run(&self) -> &str {
        match self.buffer.rfind(is_operator_symbol) {
            Some(idx) => &self.buffer[idx + 1..],
            None => &self.buffer,
        }
    }

    fn delete(&mut self) {
        if self.state == CalcState::Error {
            self.reset();
            return;
        }

        self.pending = None;
        self.buffer.pop();
        if self.buffer.is_empty() || self.buffer == "-" {
            self.reset();
        }
    }

    fn toggle_sign(&mut self) {
        if self.state == CalcState::Error || self.buffer.is_empty() || self.buffer == EMPTY_BUFFER
        {
            return;
        }

        self.pending = None;
        match self.buffer.strip_prefix('-') {
            Some(rest) => self.buffer = rest.to_string(),
            None => self.buffer.insert(0, '-'),
        }
    }

    fn apply_operator(&mut self, op: Operator) {
        if self.state == CalcState::Error {
            self.reset();
            return;
        }

        self.pending = None;
        self.buffer.push(op.symbol());

        let classified = tokenizer::split_buffer(&self.buffer);
        self.diagnostics.discarded_tokens += classified.discarded.len() as u64;

        if classified.operands.is_empty() {
            self.reset();
            return;
        }

        self.diagnostics.evaluations += 1;
        match reducer::reduce(op, &classified.operands) {
            Ok(value) => {
                self.buffer = format_result(value);
                self.pending = Some(op);
            }
            Err(err) => {
                warn!(operator = %op, operands = ?classified.operands, error = %err, "evaluation failed");
                self.diagnostics.failures += 1;
                self.buffer = self.error_text(err);
                self.state = CalcState::Error;
            }
        }
    }

    fn error_text(&self, err: ReduceError) -> String {
        if self.detailed_errors {
            format!("{}: {err}", self.error_marker)
        } else {
            self.error_marker.clone()
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a reduction result for the buffer: the shortest decimal that reads
/// back as the same `f32`, without exponent. Negative zero prints as `0`.
pub fn format_result(value: f32) -> String {
    if value == 0.0 {
        return EMPTY_BUFFER.to_string();
    }
    value.to_string()
}
