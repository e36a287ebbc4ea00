//! pdfship - ships pdf.js web-viewer assets with your application.
//!
//! Two lifecycle roles, one binary:
//!
//! - `pdfship publish` copies the packaged asset subtree into the
//!   distribution output tree. A failure here is a broken package, so
//!   any error aborts with a non-zero exit.
//! - `pdfship install` places the asset subtree into the host project's
//!   public directory. Asset placement is a convenience (the viewer can
//!   load assets from a custom URL at runtime), so this never fails the
//!   host installation: errors become warnings and the exit code stays 0.
//! - `pdfship check` verifies the packaged asset tree is complete before
//!   publishing.

#![allow(dead_code)]

mod cli;
mod config;
mod locate;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::PackConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Publish { .. } => cli::publish::publish_assets(&PackConfig::load(&cli)?),
        // Install handles its own config load: nothing on this path may
        // propagate an error, config parsing included
        Commands::Install { host_root } => cli::install::install_assets(&cli, host_root.as_deref()),
        Commands::Check { warn_only } => {
            cli::check::check_assets(&PackConfig::load(&cli)?, *warn_only)
        }
    }
}
