//! # Session Module
//!
//! The interactive karaoke loop. A [`Session`] owns the catalog and the
//! play queue for its lifetime, reads commands from a [`Console`] and runs
//! until the user quits.
//!
//! ## Commands
//!
//! | Command  | Effect                                                     |
//! |----------|------------------------------------------------------------|
//! | `add`    | Ask for artist, title and video URL; add to the song book  |
//! | `choose` | Pick an artist, then one of their songs; queue it          |
//! | `play`   | Take the next song off the queue and show where to find it |
//! | `quit`   | End the session                                            |
//!
//! ## Error Recovery
//!
//! Bad input never ends the session. An unknown command, a selection out of
//! range or an invalid song is reported and the loop returns to the main
//! prompt. Only two things stop the loop early:
//!
//! - the input reaching end-of-file, or failing [`MAX_READ_FAILURES`] times
//!   in a row, which terminates the session normally so the caller can
//!   still save;
//! - the output failing, which is returned as an error.
//!
//! Loading and saving the song book are the caller's job; the session is a
//! pure in-memory transform of catalog and queue.

use crate::catalog::SongCatalog;
use crate::codec;
use crate::console::{Console, MENU};
use crate::error::KaraokeError;
use crate::queue::PlayQueue;
use crate::song::Song;
use log::{debug, info, warn};
use std::str::FromStr;

/// Consecutive input failures after which the session gives up.
pub const MAX_READ_FAILURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// A top-level menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Choose,
    Play,
    Quit,
}

impl FromStr for Command {
    type Err = KaraokeError;

    /// Parse a command case-insensitively, ignoring surrounding whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "choose" => Ok(Self::Choose),
            "play" => Ok(Self::Play),
            "quit" => Ok(Self::Quit),
            _ => Err(KaraokeError::UnknownCommand(input.trim().to_string())),
        }
    }
}

/// One karaoke session over a console.
#[derive(Debug)]
pub struct Session<C> {
    catalog: SongCatalog,
    queue: PlayQueue,
    console: C,
    state: SessionState,
    read_failures: usize,
}

impl<C: Console> Session<C> {
    /// Start a session over a loaded catalog with an empty queue.
    pub fn new(catalog: SongCatalog, console: C) -> Self {
        Self {
            catalog,
            queue: PlayQueue::new(),
            console,
            state: SessionState::Running,
            read_failures: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &SongCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    /// Hand back the final catalog, queue and console.
    pub fn into_parts(self) -> (SongCatalog, PlayQueue, C) {
        (self.catalog, self.queue, self.console)
    }

    /// Run until the session terminates.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::Output`] if the console cannot be written to.
    /// Every other error is handled inside the loop.
    pub fn run(&mut self) -> Result<(), KaraokeError> {
        info!("Session started with {} songs", self.catalog.song_count());
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!("Session ended with {} songs queued", self.queue.size());
        Ok(())
    }

    /// Show the status and menu, read one command and carry it out.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::Output`] if the console cannot be written to.
    pub fn step(&mut self) -> Result<(), KaraokeError> {
        self.console.say("")?;
        self.console.say(&format!(
            "There are {} songs available and {} songs in your queue.",
            self.catalog.song_count(),
            self.queue.size()
        ))?;
        self.console.show_menu()?;
        self.console.prompt("What do you want to do? ")?;

        let outcome = self
            .console
            .read_command()
            .and_then(|input| input.parse::<Command>())
            .and_then(|command| self.execute(command));
        self.recover(outcome)
    }

    /// Carry out one command.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted the command. The session itself stays
    /// usable; [`Session::step`] reports these and carries on.
    pub fn execute(&mut self, command: Command) -> Result<(), KaraokeError> {
        debug!("Executing {command:?}");
        match command {
            Command::Add => {
                let song = self.prompt_new_song()?;
                self.catalog.add_song(song.clone())?;
                self.console.say(&format!("{song} added!"))
            }
            Command::Choose => {
                if self.catalog.is_empty() {
                    return self.console.say(
                        "There are no songs in the song book yet. Select 'add' on the menu to add one.",
                    );
                }
                let artist = self.prompt_artist()?;
                let song = self.prompt_song_for_artist(&artist)?;
                self.queue.enqueue(song.clone());
                self.console.say(&format!("You chose: {song}"))
            }
            Command::Play => self.play_next(),
            Command::Quit => {
                self.state = SessionState::Terminated;
                self.console.say("Thanks for playing!")
            }
        }
    }

    /// Take the next song off the queue and say where to find it.
    fn play_next(&mut self) -> Result<(), KaraokeError> {
        match self.queue.dequeue_next() {
            Some(song) => self.console.say(&format!(
                "Open {} to hear {} by {}",
                song.media_reference(),
                song.title(),
                song.artist()
            )),
            None => self.console.say(
                "Sorry, there are no songs in the queue. Select 'choose' on the menu to add songs.",
            ),
        }
    }

    fn prompt_new_song(&mut self) -> Result<Song, KaraokeError> {
        let artist = self.ask("Enter the artist's name: ", "artist")?;
        let title = self.ask("Enter the title: ", "title")?;
        let media_reference = self.ask("Enter the video URL: ", "media reference")?;
        Song::new(artist, title, media_reference)
    }

    fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String, KaraokeError> {
        self.console.prompt(prompt)?;
        let value = self.console.read_text()?;
        codec::ensure_storable(field, &value)?;
        Ok(value)
    }

    fn prompt_artist(&mut self) -> Result<String, KaraokeError> {
        let artists = self.catalog.list_artists();
        let index = select_index(&mut self.console, "Available artists:", &artists)?;
        Ok(artists[index].to_string())
    }

    fn prompt_song_for_artist(&mut self, artist: &str) -> Result<Song, KaraokeError> {
        let songs = self.catalog.list_songs(artist);
        let titles: Vec<&str> = songs.iter().map(Song::title).collect();
        let heading = format!("Available songs for {artist}:");
        let index = select_index(&mut self.console, &heading, &titles)?;
        Ok(songs[index].clone())
    }

    /// Report an aborted command and decide whether the loop goes on.
    fn recover(&mut self, outcome: Result<(), KaraokeError>) -> Result<(), KaraokeError> {
        if !matches!(outcome, Err(KaraokeError::InputRead(_))) {
            self.read_failures = 0;
        }

        match outcome {
            Ok(()) => Ok(()),
            Err(e @ KaraokeError::Output(_)) => Err(e),
            Err(KaraokeError::InputClosed) => {
                info!("Input closed, ending session");
                self.state = SessionState::Terminated;
                self.console.say("")?;
                self.console.say("Input closed. Thanks for playing!")
            }
            Err(e @ KaraokeError::InputRead(_)) => {
                self.read_failures += 1;
                warn!("{e} ({} in a row)", self.read_failures);
                self.console.say(&format!("Problem with input: {e}"))?;
                if self.read_failures >= MAX_READ_FAILURES {
                    self.state = SessionState::Terminated;
                    self.console.say("Too many input problems, ending the session.")?;
                }
                Ok(())
            }
            Err(KaraokeError::UnknownCommand(input)) => {
                let commands: Vec<&str> = MENU.iter().map(|(command, _)| *command).collect();
                self.console.say(&format!(
                    "Unknown choice: '{input}'. Try again with one of: {}",
                    commands.join(", ")
                ))
            }
            Err(e) => {
                debug!("Command aborted: {e}");
                self.console.say(&format!("Sorry, {e}"))
            }
        }
    }
}

/// Present `labels` numbered from 1 and read the user's pick.
///
/// Returns the 0-based index of the chosen label.
///
/// # Errors
///
/// Returns [`KaraokeError::InvalidIndex`] for input that is not a number in
/// `1..=labels.len()`, and input or output errors from the console.
pub fn select_index<C: Console + ?Sized>(
    console: &mut C,
    heading: &str,
    labels: &[&str],
) -> Result<usize, KaraokeError> {
    console.say(heading)?;
    for (index, label) in labels.iter().enumerate() {
        console.say(&format!("{}.  {label}", index + 1))?;
    }
    console.prompt("Enter a number: ")?;
    let input = console.read_text()?;
    parse_index(&input, labels.len())
}

/// Parse a 1-based menu selection into a 0-based index below `len`.
///
/// # Errors
///
/// Returns [`KaraokeError::InvalidIndex`] if `input` is not an integer in
/// `1..=len`.
pub fn parse_index(input: &str, len: usize) -> Result<usize, KaraokeError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Ok(number - 1),
        _ => Err(KaraokeError::InvalidIndex {
            input: input.to_string(),
            max: len,
        }),
    }
}
