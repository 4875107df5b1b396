mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod quotes;
mod rows;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::quotes::QuoteClient;
use crate::ui::input::InputMultiplexer;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::{error::Error, io};
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Path to the configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Seconds between quote fetches, overriding the configuration file.
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Write a default configuration file
    Init {
        /// Path to the configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("QUOTEWATCH_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start { config, interval } => {
            let config_path = match config {
                Some(path) => path,
                None => get_config_path()?,
            };
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(secs) = interval {
                config.refresh_interval_secs = secs;
            }
            start(config, environment).await
        }
        Command::Init { config } => {
            let config_path = match config {
                Some(path) => path,
                None => get_config_path()?,
            };
            Config::default().save(&config_path)?;
            println!("Wrote default configuration to {}", config_path.display());
            Ok(())
        }
    }
}

/// Starts the dashboard.
///
/// Terminal-mode acquisition failures abort before the loop; every exit path
/// after acquisition runs the restore sequence below exactly once.
async fn start(config: Config, environment: Environment) -> Result<(), Box<dyn Error>> {
    let client = QuoteClient::new(environment)?;

    // Shutdown fan-out: an interrupt signal behaves like a quit key.
    let (shutdown_sender, _) = broadcast::channel(1);
    {
        let shutdown_sender = shutdown_sender.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = shutdown_sender.send(());
            }
        });
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(&config, shutdown_sender.subscribe());
    let mut input = InputMultiplexer::new(shutdown_sender.subscribe());
    let res = ui::run(&mut terminal, app, &client, &mut input).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
