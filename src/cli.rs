//! # Command-Line Interface Module
//!
//! Argument parsing for the `karaoke` binary, using Clap derive macros.
//!
//! ## Commands
//!
//! - *(none)*: start an interactive karaoke session
//! - `list`: print the song book and exit
//! - `completion`: print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! karaoke
//! karaoke --songs party.txt
//! karaoke list --json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "karaoke")]
#[command(about = "Karaoke: a console song book and sing-along queue")]
#[command(version)]
pub struct Args {
    /// Song book file to load at start and save at exit
    ///
    /// Defaults to `songs.txt` in the platform data directory.
    #[arg(short, long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub songs: Option<PathBuf>,

    /// Subcommand to run instead of an interactive session
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every song in the song book, grouped by artist
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Usage: karaoke completion bash > ~/.local/share/bash-completion/completions/karaoke
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_starts_session() {
        let args = Args::try_parse_from(["karaoke"]).unwrap();

        assert!(args.command.is_none());
        assert!(args.songs.is_none());
    }

    #[test]
    fn test_songs_flag_is_global() {
        let args = Args::try_parse_from(["karaoke", "list", "--json", "--songs", "party.txt"]).unwrap();

        assert_eq!(args.songs, Some(PathBuf::from("party.txt")));
        assert_eq!(args.command, Some(Command::List { json: true }));
    }

    #[test]
    fn test_completion_shell_parsing() {
        let args = Args::try_parse_from(["karaoke", "completion", "fish"]).unwrap();
        assert_eq!(args.command, Some(Command::Completion { shell: Shell::Fish }));
    }
}
