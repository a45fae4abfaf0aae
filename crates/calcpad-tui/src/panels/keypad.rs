//! Keypad panel: the button grid, with the last pressed key highlighted.

use calcpad_core::{Event, Operator};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

/// One keypad button: its face and the keyboard key that presses it.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub label: &'static str,
    pub key: &'static str,
    pub event: Event,
}

const fn button(label: &'static str, key: &'static str, event: Event) -> Button {
    Button { label, key, event }
}

const fn digit(label: &'static str, symbol: char) -> Button {
    button(label, label, Event::Digit(symbol))
}

const fn operator(label: &'static str, op: Operator) -> Button {
    button(label, label, Event::Operator(op))
}

/// Modifiers on top, operators down the right, numbers in the middle.
pub const KEYPAD: &[&[Button]] = &[
    &[
        button("C", "c", Event::Clear),
        button("DEL", "bksp", Event::Delete),
        button("+/-", "n", Event::ToggleSign),
        operator("/", Operator::Divide),
    ],
    &[
        digit("7", '7'),
        digit("8", '8'),
        digit("9", '9'),
        operator("*", Operator::Multiply),
    ],
    &[
        digit("4", '4'),
        digit("5", '5'),
        digit("6", '6'),
        operator("-", Operator::Subtract),
    ],
    &[
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        operator("+", Operator::Add),
    ],
    &[
        operator("%", Operator::Percent),
        digit("0", '0'),
        button(".", ".", Event::DecimalPoint),
    ],
];

pub struct KeypadPanel {
    pub last_pressed: Option<Event>,
}

impl KeypadPanel {
    pub fn new() -> Self {
        Self { last_pressed: None }
    }

    pub fn press(&mut self, event: Event) {
        self.last_pressed = Some(event);
    }

    fn cell(&self, button: &Button) -> Cell<'static> {
        let style = if self.last_pressed == Some(button.event) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if matches!(button.event, Event::Operator(_)) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let text = if button.key == button.label {
            format!(" {} ", button.label)
        } else {
            format!(" {} ({})", button.label, button.key)
        };
        Cell::from(text).style(style)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = KEYPAD
            .iter()
            .map(|row| Row::new(row.iter().map(|button| self.cell(button))).height(2))
            .collect();

        let table = Table::new(rows, [Constraint::Ratio(1, 4); 4])
            .block(Block::default().title(" Keypad ").borders(Borders::ALL));
        frame.render_widget(table, area);
    }
}

impl Default for KeypadPanel {
    fn default() -> Self {
        Self::new()
    }
}
