//! `[assets]` section configuration.
//!
//! Describes where the packaged viewer asset subtree lives inside this
//! package and the subdirectory name it keeps at every destination.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! dir = "pdfjs"       # assets/pdfjs/ → <dest>/pdfjs/
//! source = "assets"   # package-relative source root
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Asset subdirectory name, kept identical on the source and every
    /// destination side so runtime URLs stay stable (`/pdfjs/web/viewer.html`).
    pub dir: String,

    /// Package-relative directory that holds the asset subtree.
    pub source: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "pdfjs".into(),
            source: "assets".into(),
        }
    }
}
