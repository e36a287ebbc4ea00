//! Packaged asset tree verification.

use anyhow::{Result, bail};

use crate::config::PackConfig;
use crate::utils::plural_s;
use crate::{log, warn};

/// Viewer entry files the default runtime URL depends on.
///
/// `<asset dir>/web/viewer.html` is the page the component falls back to
/// when no explicit viewer URL is configured; the two build artifacts are
/// loaded by it.
const VIEWER_ENTRIES: &[&str] = &["web/viewer.html", "build/pdf.mjs", "build/pdf.worker.mjs"];

/// Verify the packaged asset subtree exists and is complete.
///
/// Missing entries are reported individually on stderr; unless
/// `warn_only` is set the command then fails so a broken tree cannot be
/// published unnoticed.
pub fn check_assets(config: &PackConfig, warn_only: bool) -> Result<()> {
    let source = config.asset_source();

    if !source.is_dir() {
        let message = format!(
            "asset directory '{}' not found",
            config.root_relative(&source).display()
        );
        if warn_only {
            warn!("check"; "{}", message);
            return Ok(());
        }
        bail!(message);
    }

    let missing: Vec<&str> = VIEWER_ENTRIES
        .iter()
        .copied()
        .filter(|entry| !source.join(entry).is_file())
        .collect();

    for entry in &missing {
        warn!("check"; "missing viewer entry: {}/{}", config.assets.dir, entry);
    }

    if missing.is_empty() {
        log!("check"; "asset tree complete ({} entries verified)", VIEWER_ENTRIES.len());
        Ok(())
    } else if warn_only {
        Ok(())
    } else {
        bail!(
            "{} of {} required viewer file{} missing",
            missing.len(),
            VIEWER_ENTRIES.len(),
            plural_s(VIEWER_ENTRIES.len())
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
