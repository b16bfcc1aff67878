//! Console karaoke: keep a song book, queue songs to sing, play them in turn.
//!
//! Core modules:
//! - [`catalog`] - The song book, grouped by artist
//! - [`queue`] - First-in first-out play queue
//! - [`codec`] - Flat text format of the song book
//! - [`session`] - Interactive command loop
//!
//! ### Supporting Modules
//!
//! - [`song`] - The song value type
//! - [`console`] - Console trait, stdin/stdout console and listings
//! - [`storage`] - Loading and atomically saving the song book file
//! - [`config`] - Song book location
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`error`] - Domain error type
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use karaoke::{console::StdConsole, session::Session, storage};
//! use std::path::Path;
//!
//! let path = Path::new("songs.txt");
//! let catalog = storage::load_catalog(path)?;
//!
//! let mut session = Session::new(catalog, StdConsole::stdio());
//! session.run()?;
//!
//! let (catalog, _queue, _console) = session.into_parts();
//! storage::save_catalog(path, &catalog)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Song Book Format
//!
//! One song per line, `artist,title,video url`. Lines that don't have
//! exactly three fields are skipped with a warning when loading.
//!
//! ## Error Handling
//!
//! Library operations return [`error::KaraokeError`]; file and process level
//! code uses `anyhow::Result` with context. Logging goes through the `log`
//! facade; the binary installs `env_logger` (`RUST_LOG=debug karaoke`).

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod completion;
pub mod config;
pub mod console;
pub mod error;
pub mod queue;
pub mod session;
pub mod song;
pub mod storage;
