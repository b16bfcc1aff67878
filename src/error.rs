//! # Error Module
//!
//! Domain errors raised by the catalog, the storage codec and the
//! interactive session. Almost all of them are recoverable: the session
//! reports them and returns to the main prompt. The binary wraps anything
//! that escapes in `anyhow` with file-path context.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KaraokeError {
    /// The underlying input stream returned an error.
    #[error("problem with input: {0}")]
    InputRead(#[source] io::Error),

    /// The input stream reached end-of-file.
    #[error("input stream closed")]
    InputClosed,

    /// Writing to the console failed.
    #[error("problem writing output: {0}")]
    Output(#[source] io::Error),

    /// A selection was not a number in `1..=max`.
    #[error("invalid selection '{input}': enter a number between 1 and {max}")]
    InvalidIndex { input: String, max: usize },

    #[error("unknown choice: '{0}'")]
    UnknownCommand(String),

    /// A stored line did not split into artist, title and media reference.
    #[error("malformed record on line {line}: expected 3 fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A field contained the storage separator or a line break.
    #[error("{field} must not contain '{character}'")]
    ReservedCharacter { field: &'static str, character: char },
}

impl KaraokeError {
    /// True for errors that mean no further input can be read.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
