//! Tokenizer and operand/operator classification.
//!
//! The buffer is split on the operator delimiters `+ - * / %`. Delimiters are
//! kept as [`Token::Operator`]; the text between them is kept as
//! [`Token::Text`] and classified afterwards. Neither step ever fails:
//! text that is not a number is recorded as discarded and otherwise ignored.

use tracing::debug;

use crate::operator::Operator;

/// One piece of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run of non-delimiter characters, not yet classified.
    Text(&'a str),
    /// A delimiter.
    Operator(Operator),
}

/// Split `buffer` into text runs and operator symbols, in order.
///
/// Blank runs (a leading sign, adjacent delimiters, a trailing operator) are
/// dropped. A buffer of one character or less cannot hold an
/// operator-separated expression and yields nothing.
pub fn tokenize(buffer: &str) -> Vec<Token<'_>> {
    let mut chars = buffer.chars();
    if chars.next().is_none() || chars.next().is_none() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, c) in buffer.char_indices() {
        let Some(op) = Operator::from_symbol(c) else {
            continue;
        };
        push_text(&mut tokens, &buffer[start..idx]);
        tokens.push(Token::Operator(op));
        start = idx + c.len_utf8();
    }
    push_text(&mut tokens, &buffer[start..]);
    tokens
}

fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        tokens.push(Token::Text(text));
    }
}

/// Tokens sorted into operands, operators and discarded text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    /// Parsed operands, in buffer order.
    pub operands: Vec<f32>,
    /// Operator symbols, in buffer order.
    pub operators: Vec<Operator>,
    /// Text that was neither a number nor an operator.
    pub discarded: Vec<String>,
}

/// Classify a token sequence.
pub fn classify(tokens: &[Token<'_>]) -> Classified {
    let mut classified = Classified::default();
    for token in tokens {
        match *token {
            Token::Operator(op) => classified.operators.push(op),
            Token::Text(text) => match text.trim().parse::<f32>() {
                Ok(value) => classified.operands.push(value),
                Err(_) => {
                    debug!(token = text, "discarding malformed token");
                    classified.discarded.push(text.to_string());
                }
            },
        }
    }
    classified
}

/// Tokenize and classify in one step.
pub fn split_buffer(buffer: &str) -> Classified {
    classify(&tokenize(buffer))
}
