//! Fuzz target for the keystroke pipeline.
//!
//! Run with: cargo +nightly fuzz run fuzz_keystrokes
//!
//! Each input byte selects one keypad event. After every event the buffer
//! must be non-empty, and tokenizing it must never panic.

#![no_main]

use calcpad_core::{Calculator, Event, Operator, tokenizer};
use libfuzzer_sys::fuzz_target;

fn event_for(byte: u8) -> Event {
    match byte % 19 {
        n @ 0..=9 => Event::Digit(char::from(b'0' + n)),
        10 => Event::DecimalPoint,
        11 => Event::Clear,
        12 => Event::Delete,
        13 => Event::ToggleSign,
        n => Event::Operator(Operator::ALL[usize::from(n - 14)]),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut calc = Calculator::new();
    for &byte in data {
        calc.handle(event_for(byte));
        assert!(!calc.buffer().is_empty());
        let _ = tokenizer::split_buffer(calc.buffer());
    }
});
