//! `[install]` section configuration.
//!
//! The ordered candidate list the host asset locator probes, plus the
//! fallback tier used when no candidate directory exists. Declaration
//! order is preference order; the list is never reordered at runtime.
//!
//! # Example
//!
//! ```toml
//! [install]
//! candidates = ["src/public", "public", "src/static", "static"]
//! fallback = "public"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Host-root-relative directories probed for existence, first match wins.
    pub candidates: Vec<PathBuf>,

    /// Tier used unconditionally (created fresh) when no candidate exists.
    pub fallback: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                "src/public".into(),
                "public".into(),
                "src/static".into(),
                "static".into(),
            ],
            fallback: "public".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidate_order() {
        // The order is the placement contract; a reorder here changes
        // which host directory wins when several exist
        let install = InstallConfig::default();
        let expected: Vec<PathBuf> = ["src/public", "public", "src/static", "static"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(install.candidates, expected);
        assert_eq!(install.fallback, PathBuf::from("public"));
    }
}
