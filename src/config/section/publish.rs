//! `[publish]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Distribution output directory (relative to the package root).
    /// Assets land under `<output>/assets/<assets.dir>/`.
    pub output: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
        }
    }
}
