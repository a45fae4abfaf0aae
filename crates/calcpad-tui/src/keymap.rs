//! Keyboard bindings.
//!
//! Keypad symbols go straight to the calculator. Letters drive the modifier
//! keys and the log panel; `gg` jumps to the oldest log entry.

use calcpad_core::Event;
use crossterm::event::KeyCode;

/// Something the terminal keypad can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a keystroke to the calculator.
    Calc(Event),
    Quit,
    NextPanel,
    ScrollDown,
    ScrollUp,
    ScrollToTop,
    ScrollToBottom,
    None,
}

/// Key mapper with support for the `gg` sequence.
pub struct KeyMapper {
    pending: Option<KeyCode>,
}

impl KeyMapper {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Feed a key code and return the resolved action.
    pub fn resolve(&mut self, key: KeyCode) -> Action {
        if let Some(prev) = self.pending.take() {
            return self.resolve_sequence(prev, key);
        }

        match key {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => Action::NextPanel,

            // Modifier keys
            KeyCode::Char('c') | KeyCode::Esc => Action::Calc(Event::Clear),
            KeyCode::Backspace | KeyCode::Delete => Action::Calc(Event::Delete),
            KeyCode::Char('n') => Action::Calc(Event::ToggleSign),

            // Log scrolling
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('G') => Action::ScrollToBottom,
            KeyCode::Char('g') => {
                self.pending = Some(key);
                Action::None
            }

            KeyCode::Char(symbol) => Event::from_symbol(symbol).map_or(Action::None, Action::Calc),
            _ => Action::None,
        }
    }

    fn resolve_sequence(&mut self, first: KeyCode, second: KeyCode) -> Action {
        match (first, second) {
            (KeyCode::Char('g'), KeyCode::Char('g')) => Action::ScrollToTop,
            _ => self.resolve(second),
        }
    }
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcpad_core::Operator;

    #[test]
    fn test_keypad_symbols() {
        let mut km = KeyMapper::new();
        assert_eq!(km.resolve(KeyCode::Char('7')), Action::Calc(Event::Digit('7')));
        assert_eq!(km.resolve(KeyCode::Char('.')), Action::Calc(Event::DecimalPoint));
        assert_eq!(
            km.resolve(KeyCode::Char('/')),
            Action::Calc(Event::Operator(Operator::Divide))
        );
        assert_eq!(
            km.resolve(KeyCode::Char('%')),
            Action::Calc(Event::Operator(Operator::Percent))
        );
    }

    #[test]
    fn test_modifier_keys() {
        let mut km = KeyMapper::new();
        assert_eq!(km.resolve(KeyCode::Char('c')), Action::Calc(Event::Clear));
        assert_eq!(km.resolve(KeyCode::Esc), Action::Calc(Event::Clear));
        assert_eq!(km.resolve(KeyCode::Backspace), Action::Calc(Event::Delete));
        assert_eq!(km.resolve(KeyCode::Char('n')), Action::Calc(Event::ToggleSign));
    }

    #[test]
    fn test_app_keys() {
        let mut km = KeyMapper::new();
        assert_eq!(km.resolve(KeyCode::Char('q')), Action::Quit);
        assert_eq!(km.resolve(KeyCode::Tab), Action::NextPanel);
        assert_eq!(km.resolve(KeyCode::Char('j')), Action::ScrollDown);
        assert_eq!(km.resolve(KeyCode::Char('G')), Action::ScrollToBottom);
        assert_eq!(km.resolve(KeyCode::Char('x')), Action::None);
        assert_eq!(km.resolve(KeyCode::Enter), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let mut km = KeyMapper::new();
        assert_eq!(km.resolve(KeyCode::Char('g')), Action::None);
        assert_eq!(km.resolve(KeyCode::Char('g')), Action::ScrollToTop);
    }

    #[test]
    fn test_broken_sequence_keeps_second_key() {
        let mut km = KeyMapper::new();
        assert_eq!(km.resolve(KeyCode::Char('g')), Action::None);
        assert_eq!(km.resolve(KeyCode::Char('5')), Action::Calc(Event::Digit('5')));
    }
}
