//! # Song Book Codec
//!
//! Converts a [`SongCatalog`] to and from the flat text format kept on disk.
//!
//! ## Format
//!
//! One record per line, three comma-separated fields, no header:
//!
//! ```text
//! Prince,Purple Rain,http://x/pr
//! Queen,Bohemian Rhapsody,http://x/br
//! ```
//!
//! Records are written artist by artist in catalog order, so decoding an
//! encoded catalog rebuilds the same artist order and per-artist song order.
//!
//! ## Malformed records
//!
//! A line that does not split into exactly three fields, or that has an
//! empty artist or title, is skipped with a `warn!` log and decoding carries
//! on. [`decode_with_report`] also hands the skipped lines back to the
//! caller. Blank lines are ignored without a warning.

use crate::catalog::SongCatalog;
use crate::error::KaraokeError;
use crate::song::Song;
use log::{debug, warn};

/// Separator between the fields of a record.
pub const FIELD_SEPARATOR: char = ',';

/// A stored line that could not be turned into a song.
#[derive(Debug)]
pub struct SkippedRecord {
    /// 1-based line number in the decoded text.
    pub line: usize,
    pub text: String,
    pub reason: KaraokeError,
}

/// Result of a lenient decode: the songs that parsed, plus what was skipped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub catalog: SongCatalog,
    pub skipped: Vec<SkippedRecord>,
}

/// Decode stored text into a catalog, skipping malformed records.
#[must_use]
pub fn decode(raw: &str) -> SongCatalog {
    decode_with_report(raw).catalog
}

/// Decode stored text, returning the catalog and every skipped record.
#[must_use]
pub fn decode_with_report(raw: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, line) in raw.lines().enumerate() {
        let line_no = index + 1;
        // `lines()` only strips '\r' before '\n'; a final unterminated line may keep one
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let added = parse_record(line, line_no).and_then(|song| decoded.catalog.add_song(song));
        if let Err(reason) = added {
            warn!("Skipping stored song on line {line_no}: {reason}");
            decoded.skipped.push(SkippedRecord {
                line: line_no,
                text: line.to_string(),
                reason,
            });
        }
    }

    debug!(
        "Decoded {} songs by {} artists ({} records skipped)",
        decoded.catalog.song_count(),
        decoded.catalog.artist_count(),
        decoded.skipped.len()
    );
    decoded
}

/// Encode the catalog, one newline-terminated record per song.
#[must_use]
pub fn encode(catalog: &SongCatalog) -> String {
    catalog
        .songs()
        .map(|song| format!("{}\n", encode_record(song)))
        .collect()
}

/// One song as a record, without the line terminator.
#[must_use]
pub fn encode_record(song: &Song) -> String {
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        song.artist(),
        song.title(),
        song.media_reference()
    )
}

/// Check that `value` can be stored in a record and read back unchanged.
///
/// # Errors
///
/// Returns [`KaraokeError::ReservedCharacter`] if the value contains the
/// field separator or a line break.
pub fn ensure_storable(field: &'static str, value: &str) -> Result<(), KaraokeError> {
    match value.chars().find(|&c| c == FIELD_SEPARATOR || c == '\n' || c == '\r') {
        Some(character) => Err(KaraokeError::ReservedCharacter { field, character }),
        None => Ok(()),
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Song, KaraokeError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields.as_slice() {
        [artist, title, media_reference] => Song::new(*artist, *title, *media_reference),
        _ => Err(KaraokeError::MalformedRecord {
            line: line_no,
            found: fields.len(),
        }),
    }
}
