//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::services::OutputFormat;
use crate::domain::Traversal;

/// Box-drawing tree renderer and word-frequency vectorizer
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory holding the local .rstree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a JSON tree document with box-drawing connectors
    Tree {
        /// JSON document ('-' or absent = stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Traversal strategy (default from config)
        #[arg(short, long, value_enum)]
        traversal: Option<Traversal>,
    },

    /// Count words of a text file and emit the frequency vector as JSON
    Words {
        /// Text input ('-' or absent = stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Write JSON to this file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Output shape (default from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
