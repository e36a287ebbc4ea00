//! Host project root detection.

use std::path::{Path, PathBuf};

/// Derive the host project root from the installed package root.
///
/// Ascends exactly two directory levels, matching the layout of a package
/// installed one directory deep inside the host's dependency directory
/// (`<host>/node_modules/<pkg>` and equivalents). The assumption is not
/// validated: a package nested at a different depth silently yields a
/// wrong root, which is why `install --host-root` exists as an override.
/// Saturates at the filesystem root.
pub fn detect_host_root(package_root: &Path) -> PathBuf {
    let one_up = package_root.parent().unwrap_or(package_root);
    one_up.parent().unwrap_or(one_up).to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_two_levels_up() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("node_modules/pdfship");

        assert_eq!(detect_host_root(&pkg), temp.path());
    }

    #[test]
    fn test_wrong_nesting_depth_is_not_corrected() {
        // Hoisted or vendored layouts land elsewhere; detection stays dumb
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("deps/scoped/pdfship");

        assert_eq!(detect_host_root(&pkg), temp.path().join("deps"));
    }

    #[test]
    fn test_saturates_at_filesystem_root() {
        assert_eq!(detect_host_root(Path::new("/")), PathBuf::from("/"));
        assert_eq!(detect_host_root(Path::new("/pkg")), PathBuf::from("/"));
    }
}
