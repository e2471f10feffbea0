//! Divdash - terminal dashboard for portfolio performance and dividend history
//!
//! Run with: cargo run -p divdash-tui
//!
//! The analytics service address comes from `DIVDASH_API_URL` (default
//! `http://localhost:3005`). Logs go to `divdash.log` in the temp directory;
//! set `RUST_LOG` to change the level.

mod app;
mod tasks;
mod ui;
mod widgets;

use anyhow::{Context, Result};
use app::{App, AppMessage, Command};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use divdash_sdk::prelude::*;
use ratatui::prelude::*;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "divdash.log";

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = init_logging()?;
    let client = AnalyticsClient::from_env().context("invalid analytics service configuration")?;
    info!(base_url = client.base_url(), log = %log_path.display(), "Starting divdash");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, Arc::new(client)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
    }

    Ok(())
}

/// Send logs to a file so they do not draw over the alternate screen
fn init_logging() -> Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, client: Arc<AnalyticsClient>) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut app = App::new(PortfolioController::default(), today);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    // Probe the service in the background
    tasks::spawn_probe(&client, &tx);

    let tick_rate = Duration::from_millis(33);
    let mut last_tick = Instant::now();

    loop {
        // Apply finished work in arrival order
        while let Ok(message) = rx.try_recv() {
            app.apply(message);
        }

        // Render
        terminal.draw(|f| ui::render(f, &app))?;

        // Handle input
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Analyze(ticket)) => {
                            tasks::spawn_analysis(&client, &tx, ticket);
                        }
                        None => {}
                    }
                }
            }
        }

        // Update tick
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
