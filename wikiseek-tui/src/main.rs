mod api;
mod app;
mod bindings;
mod config;
#[macro_use]
mod logging;
mod terminal;
mod ui;
mod view;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Wikiseek - a keyboard-driven encyclopedia search for the terminal
#[derive(Parser)]
#[command(name = "wikiseek")]
#[command(about = "Search an encyclopedia from your terminal")]
#[command(version)]
struct Cli {
    /// Query API endpoint to search against
    #[arg(long, short, env = "WIKISEEK_ENDPOINT")]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,

    /// Initial search term; runs a search immediately on startup
    query: Option<String>,
}

// Load environment variables from .env file
// This allows WIKISEEK_ENDPOINT to be set without command-line args
fn load_env() {
    let _ = dotenv::dotenv();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_env();

    let log_config = if cli.verbose {
        logging::LogConfig::verbose()
    } else {
        logging::LogConfig::default()
    };
    logging::init_logging(&log_config)?;

    let config_manager = config::ConfigManager::new()?;
    let endpoint = config_manager.determine_endpoint(cli.endpoint)?;
    log::info!("Using endpoint {}", endpoint);

    let mut app = App::new(endpoint);
    app.log_config = log_config;

    if let Some(query) = cli.query {
        app.search_state.input = query;
        app.search_state.pending_search = true;
    }

    let mut tui = terminal::init()?;
    let result = run(&mut tui, &mut app).await;
    terminal::restore()?;
    result
}

async fn run(tui: &mut terminal::Tui, app: &mut App) -> Result<()> {
    while app.running {
        tui.draw(|frame| ui::render(app, frame))?;

        // Drain a queued search before polling for more input. The whole
        // interaction runs on this one thread of control, so a second
        // search can never start while one is in flight.
        if app.search_state.pending_search {
            app.search_state.pending_search = false;
            app.search().await?;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key)?;
            }
        }
    }

    Ok(())
}
