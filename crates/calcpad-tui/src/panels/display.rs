//! Display panel: the calculator buffer.

use calcpad_core::{CalcState, DisplayUpdate};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// The last buffer received from the calculator service.
pub struct DisplayPanel {
    pub buffer: String,
    pub state: CalcState,
}

impl DisplayPanel {
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
            state: CalcState::Idle,
        }
    }

    pub fn update(&mut self, update: DisplayUpdate) {
        self.buffer = update.buffer;
        self.state = update.state;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = match self.state {
            CalcState::Idle => Style::default().add_modifier(Modifier::BOLD),
            CalcState::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        let display = Paragraph::new(self.buffer.as_str())
            .style(style)
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(display, area);
    }
}

impl Default for DisplayPanel {
    fn default() -> Self {
        Self::new()
    }
}
