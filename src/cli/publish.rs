//! Build-time asset publishing.

use std::fs;

use anyhow::{Context, Result, bail};

use crate::config::PackConfig;
use crate::log;
use crate::utils::fs::copy_dir_recursive;
use crate::utils::plural_count;

/// Copy the packaged asset subtree into the distribution output tree.
///
/// Destination is `<output>/assets/<assets.dir>/`, next to the bundled
/// code artifact. A published package missing its asset subtree is
/// broken, so unlike install-time placement every error here propagates
/// and the process exits non-zero.
pub fn publish_assets(config: &PackConfig) -> Result<()> {
    let from = config.asset_source();
    if !from.is_dir() {
        bail!(
            "asset source '{}' not found",
            config.root_relative(&from).display()
        );
    }

    let to = config
        .root_join(&config.publish.output)
        .join("assets")
        .join(&config.assets.dir);

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }

    let copied = copy_dir_recursive(&from, &to)
        .with_context(|| format!("failed to copy '{}' -> '{}'", from.display(), to.display()))?;

    log!(
        "publish";
        "copied {} ({} -> {})",
        plural_count(copied, "file"),
        config.root_relative(&from).display(),
        config.root_relative(&to).display()
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_asset_tree(pkg_root: &Path) {
        let assets = pkg_root.join("assets/pdfjs");
        fs::create_dir_all(assets.join("sub")).unwrap();
        fs::write(assets.join("a.bin"), b"alpha").unwrap();
        fs::write(assets.join("sub/b.bin"), b"beta").unwrap();
    }

    fn config_at(pkg_root: &Path) -> PackConfig {
        let mut config = PackConfig::default();
        config.set_root(pkg_root);
        config
    }

    #[test]
    fn test_publish_copies_into_dist() {
        let temp = TempDir::new().unwrap();
        write_asset_tree(temp.path());

        publish_assets(&config_at(temp.path())).unwrap();

        let out = temp.path().join("dist/assets/pdfjs");
        assert_eq!(fs::read(out.join("a.bin")).unwrap(), b"alpha");
        assert_eq!(fs::read(out.join("sub/b.bin")).unwrap(), b"beta");
    }

    #[test]
    fn test_publish_honors_output_override() {
        let temp = TempDir::new().unwrap();
        write_asset_tree(temp.path());

        let mut config = config_at(temp.path());
        config.publish.output = PathBuf::from("build");
        publish_assets(&config).unwrap();

        assert!(temp.path().join("build/assets/pdfjs/a.bin").is_file());
        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn test_publish_missing_source_is_fatal() {
        let temp = TempDir::new().unwrap();
        assert!(publish_assets(&config_at(temp.path())).is_err());
    }

    #[test]
    fn test_publish_creation_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        write_asset_tree(temp.path());
        // A plain file where the destination parent must be created
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("dist/assets"), b"obstruction").unwrap();

        assert!(publish_assets(&config_at(temp.path())).is_err());
    }
}
