//! TUI panel implementations.

mod display;
mod keypad;
mod logs;

pub use display::DisplayPanel;
pub use keypad::KeypadPanel;
pub use logs::LogsPanel;
