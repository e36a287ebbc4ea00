//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// pdfship asset distribution CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true, disable_version_flag = true)]
pub struct Cli {
    /// Print version information
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pdfship.toml)
    #[arg(short = 'C', long, default_value = "pdfship.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy the packaged viewer assets into the distribution output tree
    #[command(visible_alias = "p")]
    Publish {
        /// Output directory path (relative to the package root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Place the viewer assets into the host project's public directory
    #[command(visible_alias = "i")]
    Install {
        /// Host project root (default: two levels above the package root)
        #[arg(long, value_hint = clap::ValueHint::DirPath)]
        host_root: Option<PathBuf>,
    },

    /// Verify the packaged asset tree is complete
    #[command(visible_alias = "c")]
    Check {
        /// Report missing entries as warnings instead of failing
        #[arg(short = 'w', long)]
        warn_only: bool,
    },
}
