pub mod handlers;

use crate::component::{Language, MediaKind, TileType};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Language selector for commands that may target both lists at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageScope {
    De,
    En,
    All,
}

impl LanguageScope {
    #[must_use]
    pub fn languages(self) -> Vec<Language> {
        match self {
            Self::De => vec![Language::De],
            Self::En => vec![Language::En],
            Self::All => Language::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kioskctl", about = "Content manager for the kiosk signage display")]
pub struct Cli {
    /// Path to the INI configuration file
    #[arg(long, global = true, default_value = "kiosk.conf")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the configuration file
    Config(ConfigArgs),
    /// Manage the kiosk tiles
    #[command(subcommand)]
    Kiosk(KioskCommand),
    /// Manage the media catalog
    #[command(subcommand)]
    Media(MediaCommand),
    /// Maintenance tools
    #[command(subcommand)]
    Tools(ToolsCommand),
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// List every section
    #[arg(short, long, conflicts_with = "section")]
    pub all: bool,

    /// Show a single section
    #[arg(short, long)]
    pub section: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum KioskCommand {
    /// Add a tile
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        link: String,
        #[arg(long = "type", value_enum)]
        kind: TileType,
        #[arg(long, value_enum, default_value = "all")]
        language: LanguageScope,
        /// 1-based insert-before position; 0 appends
        #[arg(long, default_value_t = 0)]
        position: i64,
    },
    /// Remove a tile by id
    Remove {
        #[arg(long)]
        id: usize,
        #[arg(long, value_enum, default_value = "all")]
        language: LanguageScope,
    },
    /// List all tiles
    List,
    /// Edit a tile; only the supplied fields change
    Edit {
        #[arg(long)]
        id: usize,
        #[arg(long, value_enum)]
        language: Language,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        link: Option<String>,
        #[arg(long = "type", value_enum)]
        kind: Option<TileType>,
    },
    /// Remove several tiles from both languages at once
    BulkRemove {
        #[arg(long, num_args = 1.., required = true)]
        ids: Vec<usize>,
    },
    /// Remove every tile in both languages
    Clear,
    /// Interactive tile management
    Wizard,
}

#[derive(Subcommand, Debug)]
pub enum MediaCommand {
    /// Add a media entry
    Add {
        #[arg(long)]
        title: String,
        /// Raw filename inside the media directory
        #[arg(long)]
        file: String,
        #[arg(long = "type", value_enum)]
        kind: MediaKind,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a media entry by id
    Remove {
        #[arg(long)]
        id: usize,
    },
    /// List the media catalog
    List,
    /// Edit a media entry; only the supplied fields change
    Edit {
        #[arg(long)]
        id: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "type", value_enum)]
        kind: Option<MediaKind>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove every media entry
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ToolsCommand {
    /// Extract one frame per video as a thumbnail image
    Thumbnail {
        /// Video directory (default: <media_directory>/videos)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Output directory (default: <media_directory>/thumbnails)
        #[arg(long)]
        target: Option<PathBuf>,
    },
}
