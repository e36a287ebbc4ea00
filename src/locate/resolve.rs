//! Ordered candidate probing for the host's public-asset directory.

use std::path::{Path, PathBuf};

use crate::config::InstallConfig;
use crate::utils::fs::dir_exists;

/// One tier of the resolution strategy.
///
/// `probe` is checked for existence; when it exists, `target` (joined
/// with the asset subdirectory name) becomes the copy destination. In the
/// shipped configuration the two are the same directory; they are kept
/// separate so a tier can place assets somewhere other than the directory
/// whose presence selected it.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Host-root-relative directory whose existence selects this tier.
    pub probe: PathBuf,
    /// Host-root-relative directory that receives the asset subdirectory.
    pub target: PathBuf,
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute copy destination, `<host root>/<tier>/<asset dir>`.
    pub target: PathBuf,
    /// The same destination relative to the host root, for reporting.
    pub relative: PathBuf,
    /// True when no candidate existed and the fallback tier was used.
    pub fell_back: bool,
}

/// First-match-wins resolver over an ordered candidate list.
///
/// Declaration order is preference order and is never reordered at
/// runtime. When no probe directory exists the fallback tier is chosen
/// unconditionally; the fallback itself is never probed.
#[derive(Debug, Clone)]
pub struct HostResolver {
    candidates: Vec<Candidate>,
    fallback: PathBuf,
    asset_dir: String,
}

impl HostResolver {
    /// Build a resolver from the `[install]` section and the asset
    /// subdirectory name.
    pub fn from_config(install: &InstallConfig, asset_dir: &str) -> Self {
        let candidates = install
            .candidates
            .iter()
            .map(|dir| Candidate {
                probe: dir.clone(),
                target: dir.clone(),
            })
            .collect();

        Self {
            candidates,
            fallback: install.fallback.clone(),
            asset_dir: asset_dir.to_string(),
        }
    }

    /// Resolve the copy destination beneath the given host root.
    ///
    /// Probes candidates in declaration order and short-circuits on the
    /// first existing directory. Touches the filesystem only for the
    /// existence checks; nothing is created here.
    pub fn resolve(&self, host_root: &Path) -> Resolution {
        for candidate in &self.candidates {
            if dir_exists(&host_root.join(&candidate.probe)) {
                let relative = candidate.target.join(&self.asset_dir);
                return Resolution {
                    target: host_root.join(&relative),
                    relative,
                    fell_back: false,
                };
            }
        }

        let relative = self.fallback.join(&self.asset_dir);
        Resolution {
            target: host_root.join(&relative),
            relative,
            fell_back: true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
