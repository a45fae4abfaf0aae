//! Terminal keypad state and event handling.

use calcpad_core::{CalculatorHandle, DisplayUpdate, LogReader, ServiceError};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::warn;

use crate::keymap::{Action, KeyMapper};
use crate::panels::{DisplayPanel, KeypadPanel, LogsPanel};

/// The panel shown under the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Keypad,
    Logs,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Panel::Keypad => "Keypad",
            Panel::Logs => "Logs",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Panel::Keypad => Panel::Logs,
            Panel::Logs => Panel::Keypad,
        }
    }
}

/// TUI application state.
pub struct App {
    pub should_quit: bool,
    pub active_panel: Panel,
    pub keymap: KeyMapper,
    pub display: DisplayPanel,
    pub keypad: KeypadPanel,
    pub logs: LogsPanel,
    calculator: CalculatorHandle,
    updates: broadcast::Receiver<DisplayUpdate>,
}

impl App {
    /// Create an app that forwards keystrokes through `calculator`.
    pub fn new(calculator: CalculatorHandle, log_reader: LogReader) -> Self {
        let updates = calculator.subscribe();
        Self {
            should_quit: false,
            active_panel: Panel::Keypad,
            keymap: KeyMapper::new(),
            display: DisplayPanel::new(),
            keypad: KeypadPanel::new(),
            logs: LogsPanel::new(log_reader),
            calculator,
            updates,
        }
    }

    /// Process a resolved action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Calc(event) => {
                self.keypad.press(event);
                match self.calculator.try_send(event) {
                    Ok(()) => {}
                    Err(ServiceError::Full) => warn!(?event, "keystroke dropped, queue full"),
                    Err(ServiceError::Closed) => self.should_quit = true,
                }
            }
            Action::Quit => self.should_quit = true,
            Action::NextPanel => self.active_panel = self.active_panel.next(),
            Action::ScrollDown => self.logs.scroll_down(1),
            Action::ScrollUp => self.logs.scroll_up(1),
            Action::ScrollToTop => self.logs.scroll_to_top(),
            Action::ScrollToBottom => self.logs.scroll_to_bottom(),
            Action::None => {}
        }
    }

    /// Tick: pull pending display updates and refresh the log snapshot.
    pub fn tick(&mut self) {
        loop {
            match self.updates.try_recv() {
                Ok(update) => self.display.update(update),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "display updates lagged");
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Closed) => {
                    self.should_quit = true;
                    break;
                }
            }
        }
        self.logs.refresh();
    }

    /// Stop the calculator service.
    pub fn shutdown(&self) {
        self.calculator.shutdown();
    }

    pub fn status_line(&self) -> String {
        format!(
            " q:quit  c:clear  bksp:delete  n:+/-  Tab:panel  j/k/gg/G:scroll  [{panel}]",
            panel = self.active_panel.title()
        )
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // display
                Constraint::Min(1),    // keypad or logs
                Constraint::Length(2), // status bar
            ])
            .split(frame.area());

        self.display.render(frame, chunks[0]);
        match self.active_panel {
            Panel::Keypad => self.keypad.render(frame, chunks[1]),
            Panel::Logs => self.logs.render(frame, chunks[1]),
        }

        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(status, chunks[2]);
    }
}
