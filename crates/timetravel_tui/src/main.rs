//! Time-travel tic-tac-toe terminal front-end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use timetravel_tui::{App, Cli, TuiConfig, draw, enter_terminal};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    }
    .with_overrides(cli.reversed, cli.log_file);

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(reversed = config.reversed(), "Starting time-travel tic-tac-toe");

    let res = {
        let _guard = enter_terminal().context("Failed to set up terminal")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let res = run(&mut terminal, App::new(*config.reversed()));
        terminal.show_cursor()?;
        res
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws and handles key presses until the user quits.
#[instrument(skip_all)]
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!(moves = app.game().history().len() - 1, "User quit");
    Ok(())
}
