//! Logs panel: evaluation log with auto-follow.

use calcpad_core::LogReader;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::Level;

/// Scrollable view over the log collector.
pub struct LogsPanel {
    reader: LogReader,
    /// Snapshot taken on the last tick.
    lines: Vec<LogLine>,
    /// Lines scrolled up from the newest entry.
    scroll_offset: usize,
    auto_follow: bool,
}

struct LogLine {
    elapsed: String,
    level: Level,
    text: String,
}

impl LogsPanel {
    pub fn new(reader: LogReader) -> Self {
        Self {
            reader,
            lines: Vec::new(),
            scroll_offset: 0,
            auto_follow: true,
        }
    }

    /// Refresh the snapshot from the collector.
    pub fn refresh(&mut self) {
        self.lines = self
            .reader
            .entries()
            .into_iter()
            .map(|entry| LogLine {
                elapsed: format!("{:>7.2}s", entry.elapsed_secs),
                level: entry.level,
                text: entry.to_string(),
            })
            .collect();

        if self.auto_follow {
            self.scroll_offset = 0;
        } else {
            self.scroll_offset = self.scroll_offset.min(self.max_offset());
        }
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn scroll_down(&mut self, n: usize) {
        if self.scroll_offset > n {
            self.scroll_offset -= n;
        } else {
            self.scroll_to_bottom();
        }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.auto_follow = false;
        self.scroll_offset = (self.scroll_offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_follow = false;
        self.scroll_offset = self.max_offset();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_follow = true;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;

        if self.lines.is_empty() {
            let empty = Paragraph::new("  (no log entries yet)")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(" Logs (0) ").borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        }

        let total = self.lines.len();
        let skip = total.saturating_sub(visible + self.scroll_offset);

        let items: Vec<ListItem> = self
            .lines
            .iter()
            .skip(skip)
            .take(visible)
            .map(|line| {
                let level_style = match line.level {
                    Level::ERROR => Style::default().fg(Color::Red),
                    Level::WARN => Style::default().fg(Color::Yellow),
                    Level::INFO => Style::default().fg(Color::Green),
                    Level::DEBUG => Style::default().fg(Color::Blue),
                    Level::TRACE => Style::default().fg(Color::DarkGray),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", line.elapsed),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{:>5} ", line.level), level_style),
                    Span::raw(line.text.as_str()),
                ]))
            })
            .collect();

        let follow = if self.auto_follow { " [follow]" } else { "" };
        let title = format!(" Logs ({total}){follow} ");
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(list, area);
    }
}
