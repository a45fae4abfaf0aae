//! Keystroke events forwarded by the UI collaborator.

use crate::operator::Operator;

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One of `0`-`9`.
    Digit(char),
    DecimalPoint,
    Clear,
    Delete,
    ToggleSign,
    Operator(Operator),
}

impl Event {
    /// Map a keypad symbol (`0-9 . + - * / %`) to its event.
    ///
    /// Clear, Delete and ToggleSign have no symbol of their own; the
    /// collaborator decides which keys produce them.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Some(Event::Digit(symbol)),
            '.' => Some(Event::DecimalPoint),
            _ => Operator::from_symbol(symbol).map(Event::Operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Event::from_symbol('7'), Some(Event::Digit('7')));
        assert_eq!(Event::from_symbol('.'), Some(Event::DecimalPoint));
        assert_eq!(
            Event::from_symbol('%'),
            Some(Event::Operator(Operator::Percent))
        );
        assert_eq!(Event::from_symbol('q'), None);
        assert_eq!(Event::from_symbol(' '), None);
    }
}
