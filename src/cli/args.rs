//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use lumen_config::ConfigFormat;
use std::path::PathBuf;

/// Lumen site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the built-in configuration to the config path
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Output format (default: from file extension)
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check,

    /// Print the configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format (default: from file extension)
        #[arg(long, value_enum)]
        format: Option<ConfigFormat>,

        /// Print the built-in configuration instead of the config file
        #[arg(short, long)]
        builtin: bool,
    },

    /// List visible author contacts with their resolved links
    Contacts {
        /// Use the built-in configuration instead of the config file
        #[arg(short, long)]
        builtin: bool,
    },
}
