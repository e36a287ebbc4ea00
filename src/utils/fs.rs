//! Filesystem helpers: recursive copy and path normalization.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Check whether a path exists and is a directory.
///
/// A plain file at a candidate path does not count as a match: the
/// resolver needs somewhere to create a subdirectory.
#[inline]
pub fn dir_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Recursively copy a directory tree, returning the number of files copied.
///
/// Files at identical relative paths are overwritten; nothing is deleted
/// on the destination side, so re-running against unchanged sources is
/// idempotent at the file level. Empty source subdirectories are not
/// replicated.
pub fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut count = 0;
    copy_dir_inner(src_dir, dest_dir, &mut count)?;
    Ok(count)
}

fn copy_dir_inner(src_dir: &Path, dest_dir: &Path, count: &mut usize) -> Result<()> {
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_inner(&src_path, &dest_path, count)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&src_path, &dest_path)?;
            *count += 1;
        }
    }

    Ok(())
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_tree(root: &Path) {
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.bin"), b"alpha").unwrap();
        fs::write(root.join("sub/b.bin"), b"beta").unwrap();
    }

    #[test]
    fn test_copy_preserves_structure_and_bytes() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src);

        let count = copy_dir_recursive(&src, &dest).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(dest.join("a.bin")).unwrap(), b"alpha");
        assert_eq!(fs::read(dest.join("sub/b.bin")).unwrap(), b"beta");
    }

    #[test]
    fn test_copy_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src);

        copy_dir_recursive(&src, &dest).unwrap();
        let first: Vec<_> = collect_files(&dest);
        copy_dir_recursive(&src, &dest).unwrap();
        let second: Vec<_> = collect_files(&dest);

        assert_eq!(first, second);
    }

    #[test]
    fn test_copy_overwrites_stale_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_tree(&src);
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("a.bin"), b"stale").unwrap();

        copy_dir_recursive(&src, &dest).unwrap();

        assert_eq!(fs::read(dest.join("a.bin")).unwrap(), b"alpha");
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let dest = temp.path().join("dest");
        assert!(copy_dir_recursive(&missing, &dest).is_err());
    }

    #[test]
    fn test_dir_exists_rejects_plain_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("public");
        fs::write(&file, b"not a directory").unwrap();

        assert!(!dir_exists(&file));
        assert!(dir_exists(temp.path()));
        assert!(!dir_exists(&temp.path().join("absent")));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    fn collect_files(root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    files.push(path.strip_prefix(root).unwrap().to_path_buf());
                }
            }
        }
        files.sort();
        files
    }
}
