#![deny(unsafe_code)]

//! Calcpad: terminal keypad for the incremental calculator.

mod app;
mod keymap;
mod panels;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use calcpad_config::AppConfig;
use calcpad_core::{CalculatorService, LogCollector};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::App;

const CONFIG_PATH: &str = "calcpad.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config(Path::new(CONFIG_PATH)).await?;

    // Logs go to the in-memory collector; the terminal belongs to the UI.
    let collector = LogCollector::new(config.logging.capacity);
    let log_reader = collector.reader();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(collector)
        .init();

    let (service, handle) = CalculatorService::from_config(&config);
    let service_task = tokio::spawn(service.run());

    info!("Starting Calcpad TUI");

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(handle, log_reader);
    let result = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    app.shutdown();
    service_task.await?;
    result
}

async fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let action = app.keymap.resolve(key.code);
                    app.handle_action(action);
                }
            }
        }
        // Let the service task apply queued keystrokes before the next draw.
        tokio::task::yield_now().await;
    }
    Ok(())
}

async fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        Ok(AppConfig::load(path).await?)
    } else {
        Ok(AppConfig::default())
    }
}
