//! # Play Queue Module
//!
//! The songs waiting to be sung, first come first served. The queue lives
//! only for one session and is never written to storage.

use crate::song::Song;
use std::collections::VecDeque;

/// FIFO of songs chosen for performance.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    songs: VecDeque<Song>,
}

impl PlayQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `song` to the back of the queue.
    pub fn enqueue(&mut self, song: Song) {
        log::debug!("Queued {song}");
        self.songs.push_back(song);
    }

    /// Remove and return the song at the front.
    ///
    /// `None` means nothing is queued; that is an ordinary outcome, not an
    /// error.
    pub fn dequeue_next(&mut self) -> Option<Song> {
        self.songs.pop_front()
    }

    /// The next song without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Song> {
        self.songs.front()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
