//! # Song Module
//!
//! A [`Song`] is the unit everything else moves around: the catalog groups
//! them by artist, the play queue holds them in order, and the storage codec
//! writes one per line.
//!
//! Songs are plain immutable values. Adding a song to the catalog and later
//! queueing it produces two independent clones, never a shared reference.

use crate::codec;
use crate::error::KaraokeError;
use serde::Serialize;
use std::fmt;

/// A single singable song.
///
/// Equality is structural over all three fields. Nothing in the crate
/// deduplicates songs, so the same song may be added twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Song {
    artist: String,
    title: String,
    /// Where to find the backing track, usually a video URL.
    media_reference: String,
}

impl Song {
    /// Build a song, rejecting an empty (or whitespace-only) artist or title.
    ///
    /// The media reference may be empty. No field may contain the storage
    /// field separator or a line break.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::EmptyField`] naming the first empty field, or
    /// [`KaraokeError::ReservedCharacter`] for an unstorable field.
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        media_reference: impl Into<String>,
    ) -> Result<Self, KaraokeError> {
        let song = Self {
            artist: artist.into(),
            title: title.into(),
            media_reference: media_reference.into(),
        };
        song.validate()?;
        Ok(song)
    }

    /// Check that artist and title are non-empty and every field can be
    /// written to the song book and read back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`KaraokeError::EmptyField`] or
    /// [`KaraokeError::ReservedCharacter`].
    pub fn validate(&self) -> Result<(), KaraokeError> {
        if self.artist.trim().is_empty() {
            return Err(KaraokeError::EmptyField("artist"));
        }
        if self.title.trim().is_empty() {
            return Err(KaraokeError::EmptyField("title"));
        }
        codec::ensure_storable("artist", &self.artist)?;
        codec::ensure_storable("title", &self.title)?;
        codec::ensure_storable("media reference", &self.media_reference)
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn media_reference(&self) -> &str {
        &self.media_reference
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_song_keeps_fields_verbatim() {
        let song = Song::new("Prince", "Purple Rain", "http://x/pr").unwrap();

        assert_eq!(song.artist(), "Prince");
        assert_eq!(song.title(), "Purple Rain");
        assert_eq!(song.media_reference(), "http://x/pr");
    }

    #[test]
    fn test_empty_artist_rejected() {
        let result = Song::new("", "Purple Rain", "http://x/pr");
        assert!(matches!(result, Err(KaraokeError::EmptyField("artist"))));
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = Song::new("Prince", "   ", "http://x/pr");
        assert!(matches!(result, Err(KaraokeError::EmptyField("title"))));
    }

    #[test]
    fn test_empty_media_reference_allowed() {
        assert!(Song::new("Prince", "Purple Rain", "").is_ok());
    }

    #[test]
    fn test_separator_in_any_field_rejected() {
        assert!(matches!(
            Song::new("Crosby, Stills & Nash", "Suite", "http://x/s"),
            Err(KaraokeError::ReservedCharacter { field: "artist", character: ',' })
        ));
        assert!(matches!(
            Song::new("Prince", "Kiss\nKiss", "http://x/k"),
            Err(KaraokeError::ReservedCharacter { field: "title", character: '\n' })
        ));
        assert!(matches!(
            Song::new("Prince", "Kiss", "http://x/k?a=1,2"),
            Err(KaraokeError::ReservedCharacter { field: "media reference", character: ',' })
        ));
    }

    #[test]
    fn test_display_reads_title_by_artist() {
        let song = Song::new("Queen", "Bohemian Rhapsody", "http://x/br").unwrap();
        assert_eq!(song.to_string(), "Bohemian Rhapsody by Queen");
    }

    #[test]
    fn test_structural_equality() {
        let a = Song::new("ABBA", "Waterloo", "http://x/w").unwrap();
        let b = Song::new("ABBA", "Waterloo", "http://x/w").unwrap();
        let c = Song::new("ABBA", "Waterloo", "http://y/w").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
