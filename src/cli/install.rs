//! Install-time asset placement.
//!
//! Runs as a dependency-install hook inside an unknown host project.
//! Placement is a convenience (the viewer component accepts a custom
//! asset URL at runtime), so failing the host's installation over it
//! would be disproportionate: every error on this path is converted to a
//! stderr warning and the process exits zero.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::cli::Cli;
use crate::config::PackConfig;
use crate::locate::{HostResolver, detect_host_root};
use crate::utils::fs::{copy_dir_recursive, normalize_path};
use crate::utils::plural_count;
use crate::{debug, log, warn};

/// Place the viewer assets into the host project's public directory.
///
/// Always returns `Ok`: the error chain of any failure is logged as a
/// warning (keeping the underlying io error category visible) and
/// swallowed at this boundary.
pub fn install_assets(cli: &Cli, host_root: Option<&Path>) -> Result<()> {
    if let Err(err) = try_install(cli, host_root) {
        warn!("install"; "asset copy skipped: {err:#}");
        warn!("install"; "set the viewer's asset URL option to serve the files from elsewhere");
    }
    Ok(())
}

fn try_install(cli: &Cli, host_root: Option<&Path>) -> Result<()> {
    let config = PackConfig::load(cli)?;

    let host_root = match host_root {
        Some(path) => normalize_path(path),
        None => detect_host_root(&normalize_path(config.get_root())),
    };
    debug!("install"; "host root: {}", host_root.display());

    let placement = place_assets(&config, &host_root)?;
    log!(
        "install";
        "copied {} to {}",
        plural_count(placement.copied, "file"),
        placement.relative.display()
    );
    Ok(())
}

/// Result of a successful placement.
pub(crate) struct Placement {
    pub copied: usize,
    /// Destination relative to the host root, for reporting.
    pub relative: PathBuf,
}

/// Resolve the destination beneath `host_root` and copy the asset
/// subtree into it.
pub(crate) fn place_assets(config: &PackConfig, host_root: &Path) -> Result<Placement> {
    let source = config.asset_source();
    if !source.is_dir() {
        bail!("asset source '{}' not found", source.display());
    }

    let resolver = HostResolver::from_config(&config.install, &config.assets.dir);
    let resolution = resolver.resolve(host_root);
    if resolution.fell_back {
        debug!(
            "install";
            "no conventional asset directory found, creating {}",
            resolution.relative.display()
        );
    }

    fs::create_dir_all(&resolution.target)
        .with_context(|| format!("failed to create '{}'", resolution.target.display()))?;
    let copied = copy_dir_recursive(&source, &resolution.target).with_context(|| {
        format!(
            "failed to copy assets into '{}'",
            resolution.target.display()
        )
    })?;

    Ok(Placement {
        copied,
        relative: resolution.relative,
    })
}

// ============================================================================
// Tests
// ============================================================================
