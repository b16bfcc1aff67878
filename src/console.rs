//! # Console Module
//!
//! The presentation side of the karaoke session: how text reaches the user
//! and how lines come back. The session only talks to the [`Console`]
//! trait, so tests drive it with in-memory buffers while the binary uses
//! stdin/stdout.
//!
//! ## Input Rules
//!
//! - Commands are read with [`Console::read_command`]: trimmed and
//!   lowercased, so `  PLAY ` means `play`.
//! - Song data is read with [`Console::read_text`]: trimmed but case kept,
//!   because artist names and titles are stored exactly as typed.

use crate::catalog::SongCatalog;
use crate::error::KaraokeError;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// Main menu, in display order.
pub const MENU: [(&str, &str); 4] = [
    ("add", "Add a new song to the song book"),
    ("choose", "Choose a song to sing"),
    ("play", "Play next song in the queue"),
    ("quit", "Give up. Exit the program"),
];

/// Line-oriented user interaction.
pub trait Console {
    /// Write `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::Output`] if the output cannot be written.
    fn say(&mut self, text: &str) -> Result<(), KaraokeError>;

    /// Write `text` without a newline and flush, leaving the cursor after it.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::Output`] if the output cannot be written.
    fn prompt(&mut self, text: &str) -> Result<(), KaraokeError>;

    /// Read one line without its terminator.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::InputClosed`] at end of input and
    /// [`KaraokeError::InputRead`] if the stream fails.
    fn read_line(&mut self) -> Result<String, KaraokeError>;

    /// Read a command: trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// See [`Console::read_line`].
    fn read_command(&mut self) -> Result<String, KaraokeError> {
        Ok(self.read_line()?.trim().to_lowercase())
    }

    /// Read a data field: trimmed, case preserved.
    ///
    /// # Errors
    ///
    /// See [`Console::read_line`].
    fn read_text(&mut self) -> Result<String, KaraokeError> {
        Ok(self.read_line()?.trim().to_string())
    }

    /// Print the main menu.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::Output`] if the output cannot be written.
    fn show_menu(&mut self) -> Result<(), KaraokeError> {
        self.say("Your options are:")?;
        for (command, description) in MENU {
            self.say(&format!("{command} - {description}"))?;
        }
        Ok(())
    }
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, text: &str) -> Result<(), KaraokeError> {
        writeln!(self.output, "{text}").map_err(KaraokeError::Output)
    }

    fn prompt(&mut self, text: &str) -> Result<(), KaraokeError> {
        write!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .map_err(KaraokeError::Output)
    }

    fn read_line(&mut self) -> Result<String, KaraokeError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(KaraokeError::InputRead)?;
        if read == 0 {
            return Err(KaraokeError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

/// Human-readable catalog listing, artist by artist.
#[must_use]
pub fn render_listing(catalog: &SongCatalog) -> String {
    if catalog.is_empty() {
        return "The song book is empty.\n".to_string();
    }

    let mut listing = format!(
        "{} songs by {} artists\n",
        catalog.song_count(),
        catalog.artist_count()
    );
    for (artist, songs) in catalog.iter() {
        listing.push_str(&format!("\n{artist}\n"));
        for song in songs {
            listing.push_str(&format!("  {}  <{}>\n", song.title(), song.media_reference()));
        }
    }
    listing
}

#[derive(Serialize)]
struct ArtistListing<'a> {
    artist: &'a str,
    songs: &'a [crate::song::Song],
}

/// Catalog as pretty-printed JSON: an array of `{artist, songs}` objects in
/// catalog order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(catalog: &SongCatalog) -> serde_json::Result<String> {
    let listing: Vec<ArtistListing<'_>> = catalog
        .iter()
        .map(|(artist, songs)| ArtistListing { artist, songs })
        .collect();
    serde_json::to_string_pretty(&listing)
}
