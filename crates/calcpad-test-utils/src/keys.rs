//! Keystroke drivers.
//!
//! Tests describe keystrokes as a string of keypad symbols plus three
//! letters for the keys without a symbol: `C` (clear), `D` (delete) and
//! `N` (toggle sign). Spaces are ignored.

use calcpad_core::{Calculator, Event};

/// Translate one key of the test notation into an event.
pub fn event_for(key: char) -> Event {
    match key {
        'C' => Event::Clear,
        'D' => Event::Delete,
        'N' => Event::ToggleSign,
        other => Event::from_symbol(other)
            .unwrap_or_else(|| panic!("no keypad event for {other:?}")),
    }
}

/// Feed `keys` into `calc` and return the resulting buffer.
pub fn press(calc: &mut Calculator, keys: &str) -> String {
    for key in keys.chars().filter(|c| !c.is_whitespace()) {
        calc.handle(event_for(key));
    }
    calc.buffer().to_string()
}

/// Feed `keys` into a default calculator and return it.
pub fn press_on_fresh(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    press(&mut calc, keys);
    calc
}
