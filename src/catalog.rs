//! # Song Catalog Module
//!
//! The catalog is the song book: every known song, grouped by artist.
//!
//! ## Ordering
//!
//! Artists are kept in the order they were first added, and each artist's
//! songs in the order they were added. The numbered menus shown by the
//! session and the lines written to storage both follow this order, so it
//! is never sorted.
//!
//! ## Lookup
//!
//! Artist lookup is a linear scan over the artist entries. Song books hold
//! tens to a few hundred songs, where a scan is as fast as any index.

use crate::error::KaraokeError;
use crate::song::Song;
use log::debug;

/// All songs for one artist, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ArtistEntry {
    name: String,
    songs: Vec<Song>,
}

/// Songs grouped by artist, insertion order preserved at both levels.
///
/// An artist appears if and only if it has at least one song: entries are
/// only created by [`SongCatalog::add_song`] and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongCatalog {
    artists: Vec<ArtistEntry>,
}

impl SongCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `song` under its artist, creating the artist on first use.
    ///
    /// Artist names are matched case-sensitively, exactly as entered.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::EmptyField`] if the artist or title is empty.
    pub fn add_song(&mut self, song: Song) -> Result<(), KaraokeError> {
        song.validate()?;

        match self.artists.iter_mut().find(|entry| entry.name == song.artist()) {
            Some(entry) => entry.songs.push(song),
            None => {
                debug!("New artist in catalog: {}", song.artist());
                self.artists.push(ArtistEntry {
                    name: song.artist().to_string(),
                    songs: vec![song],
                });
            }
        }
        Ok(())
    }

    /// Artist names in order of first appearance.
    #[must_use]
    pub fn list_artists(&self) -> Vec<&str> {
        self.artists.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Songs for `artist` in insertion order.
    ///
    /// An unknown artist yields an empty slice rather than an error.
    #[must_use]
    pub fn list_songs(&self, artist: &str) -> &[Song] {
        self.artists
            .iter()
            .find(|entry| entry.name == artist)
            .map(|entry| entry.songs.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of songs across all artists.
    #[must_use]
    pub fn song_count(&self) -> usize {
        self.artists.iter().map(|entry| entry.songs.len()).sum()
    }

    #[must_use]
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Iterate `(artist, songs)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Song])> {
        self.artists
            .iter()
            .map(|entry| (entry.name.as_str(), entry.songs.as_slice()))
    }

    /// Every song, artist by artist, in catalog order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.artists.iter().flat_map(|entry| entry.songs.iter())
    }
}

impl FromIterator<Song> for SongCatalog {
    /// Collects valid songs, dropping any that fail validation.
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for song in iter {
            if let Err(e) = catalog.add_song(song) {
                log::warn!("Dropping invalid song: {e}");
            }
        }
        catalog
    }
}
