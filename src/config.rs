//! # Configuration Module
//!
//! Decides where the song book lives. Karaoke keeps a single text file,
//! `songs.txt`, in the platform-standard data directory unless `--songs`
//! points somewhere else:
//! - Linux: `~/.local/share/karaoke/songs.txt`
//! - macOS: `~/Library/Application Support/karaoke/songs.txt`
//! - Windows: `%APPDATA%\karaoke\songs.txt`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// File name of the song book.
pub const SONGS_FILE_NAME: &str = "songs.txt";

/// Returns the karaoke data directory, creating it if needed.
///
/// # Errors
///
/// This function will return an error if:
/// - The system data directory cannot be determined
/// - The karaoke subdirectory cannot be created due to permissions
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!(
            "Could not determine system data directory. Use --songs to choose a song book file."
        ))?;

    let karaoke_dir = data_dir.join("karaoke");
    fs::create_dir_all(&karaoke_dir)
        .with_context(|| format!(
            "Failed to create karaoke data directory at {}. Please check file permissions.",
            karaoke_dir.display()
        ))?;

    Ok(karaoke_dir)
}

/// Returns the default song book path inside [`get_data_dir`].
///
/// # Errors
///
/// See [`get_data_dir`].
///
/// # Examples
///
/// ```no_run
/// use karaoke::config::get_songs_path;
///
/// let songs_path = get_songs_path()?;
/// println!("Song book location: {}", songs_path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_songs_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(SONGS_FILE_NAME))
}

/// Configuration for one run of the program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Song book loaded at start and saved at exit
    pub songs_path: PathBuf,
}

impl RuntimeConfig {
    /// Configuration using the default song book location
    ///
    /// # Errors
    ///
    /// See [`get_data_dir`].
    pub fn new() -> Result<Self> {
        Ok(Self {
            songs_path: get_songs_path()?,
        })
    }

    /// Configuration with an explicit song book path
    pub fn with_songs_path(songs_path: PathBuf) -> Self {
        Self { songs_path }
    }

    /// Resolve from the optional `--songs` argument.
    ///
    /// # Errors
    ///
    /// Only fails when no path was given and the default location cannot be
    /// prepared.
    pub fn from_args(songs: Option<PathBuf>) -> Result<Self> {
        match songs {
            Some(path) => Ok(Self::with_songs_path(path)),
            None => Self::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_songs_path_file_name() {
        let path = get_songs_path().expect("Should get valid path");

        assert_eq!(path.file_name().unwrap(), SONGS_FILE_NAME);
        let parent = path.parent().expect("Should have parent directory");
        assert_eq!(parent.file_name().unwrap(), "karaoke");
        assert!(parent.is_dir());
    }

    #[test]
    fn test_get_songs_path_consistent_results() {
        let path1 = get_songs_path().expect("First call should succeed");
        let path2 = get_songs_path().expect("Second call should succeed");

        assert_eq!(path1, path2);
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = RuntimeConfig::from_args(Some(PathBuf::from("/tmp/party.txt"))).unwrap();
        assert_eq!(config.songs_path, PathBuf::from("/tmp/party.txt"));
    }

    #[test]
    fn test_config_serializes() {
        let config = RuntimeConfig::with_songs_path(PathBuf::from("songs.txt"));
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(json, r#"{"songs_path":"songs.txt"}"#);
        assert_eq!(serde_json::from_str::<RuntimeConfig>(&json).unwrap(), config);
    }
}
