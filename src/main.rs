//! # Karaoke
//!
//! Console karaoke queue. Loads the song book, runs an interactive session
//! and saves the song book again on the way out.
//!
//! ## Usage
//!
//! ```bash
//! # Start singing with the default song book
//! karaoke
//!
//! # Use a specific song book file
//! karaoke --songs party.txt
//!
//! # Print the song book
//! karaoke list
//! karaoke list --json
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use karaoke::cli::{self, Args};
use karaoke::config::RuntimeConfig;
use karaoke::console::{self, StdConsole};
use karaoke::session::Session;
use karaoke::{completion, storage};
use log::{debug, info};

/// Load the song book, run the session, save the song book.
///
/// The song book is saved even if the session ends because of an output
/// error, so songs added before the failure are kept.
fn run_session(config: &RuntimeConfig) -> Result<()> {
    let catalog = storage::load_catalog(&config.songs_path)?;

    let mut session = Session::new(catalog, StdConsole::stdio());
    let outcome = session.run();
    let (catalog, _queue, _console) = session.into_parts();

    if outcome.is_ok() {
        println!("Saving song book to {}...", config.songs_path.display());
    }
    storage::save_catalog(&config.songs_path, &catalog)?;

    outcome.context("Karaoke session ended unexpectedly")
}

fn list_catalog(config: &RuntimeConfig, json: bool) -> Result<()> {
    let catalog = storage::load_catalog(&config.songs_path)?;
    if json {
        let rendered = console::render_json(&catalog).context("Failed to render song book as JSON")?;
        println!("{rendered}");
    } else {
        print!("{}", console::render_listing(&catalog));
    }
    Ok(())
}

/// Main entry point.
///
/// Logging is controlled via `RUST_LOG` and defaults to warnings only, so
/// skipped song book lines are reported on stderr:
/// - `RUST_LOG=debug karaoke` - Enable debug logging
/// - `RUST_LOG=karaoke::codec=debug karaoke list` - Module-specific logging
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        None => {
            let config = RuntimeConfig::from_args(args.songs)?;
            debug!("Runtime config: {config:?}");
            info!("Starting session with song book {}", config.songs_path.display());
            run_session(&config)?;
        }
        Some(cli::Command::List { json }) => {
            let config = RuntimeConfig::from_args(args.songs)?;
            list_catalog(&config, json)?;
        }
        Some(cli::Command::Completion { shell }) => {
            let mut cmd = Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(shell),
                &mut cmd,
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
