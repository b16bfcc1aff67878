//! # Storage Module
//!
//! Reads the song book at session start and writes it back at session end.
//! The file is always rewritten whole, never appended to.

use crate::catalog::SongCatalog;
use crate::codec;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the song book at `path`.
///
/// A missing file is a first run and yields an empty catalog. Malformed
/// records are skipped (see [`codec::decode_with_report`]).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read as UTF-8 text.
pub fn load_catalog(path: &Path) -> Result<SongCatalog> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No song book at {}, starting empty", path.display());
            return Ok(SongCatalog::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read song book {}", path.display()));
        }
    };

    let decoded = codec::decode_with_report(&raw);
    if !decoded.skipped.is_empty() {
        warn!(
            "Skipped {} malformed record(s) in {}",
            decoded.skipped.len(),
            path.display()
        );
    }
    info!(
        "Loaded {} songs from {}",
        decoded.catalog.song_count(),
        path.display()
    );
    Ok(decoded.catalog)
}

/// Overwrite the song book at `path` with the full catalog.
///
/// The text is written to a temporary file next to `path` and then renamed
/// over it, so a failed save leaves the previous file intact.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written or renamed into place.
pub fn save_catalog(path: &Path, catalog: &SongCatalog) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(codec::encode(catalog).as_bytes())
        .context("Failed to write song book")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to save song book to {}", path.display()))?;

    info!("Saved {} songs to {}", catalog.song_count(), path.display());
    Ok(())
}
