//! Package configuration management for `pdfship.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[assets]`  | Asset subtree location and subdirectory name  |
//! | `[publish]` | Distribution output directory                 |
//! | `[install]` | Host candidate directories and fallback tier  |
//!
//! The config file is optional: every default reproduces the conventional
//! package layout, and the install hook must keep working in hosts that
//! never heard of pdfship.toml.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{AssetsConfig, InstallConfig, PublishConfig};

use crate::cli::{Cli, Commands};
use crate::{debug, warn};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pdfship.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Package root directory - parent of config file (internal use only)
    #[serde(skip)]
    root: PathBuf,

    /// Asset subtree settings
    pub assets: AssetsConfig,

    /// Build-time publishing settings
    pub publish: PublishConfig,

    /// Install-time placement settings
    pub install: InstallConfig,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            assets: AssetsConfig::default(),
            publish: PublishConfig::default(),
            install: InstallConfig::default(),
        }
    }
}

impl PackConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; its parent
    /// directory becomes the package root. A missing file yields the
    /// built-in defaults with the package root at cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(&cli.config);

        let mut config = if exists {
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "no {} found, using defaults", cli.config.display());
            Self::default()
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path, reporting whether it exists.
    fn resolve_config_path(config_name: &Path) -> (PathBuf, bool) {
        match find_config_file(config_name) {
            Some(path) => (path, true),
            None => {
                let cwd = std::env::current_dir().unwrap_or_default();
                (cwd.join(config_name), false)
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields.
    ///
    /// Both lifecycle hooks run unattended, so this never prompts.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        warn!("config"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Publish {
            output: Some(output),
        } = &cli.command
        {
            self.publish.output = output.clone();
        }
    }

    /// Validate configured paths.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.assets.dir.is_empty() {
            return Err(ConfigError::Validation(
                "assets.dir must not be empty".into(),
            ));
        }
        if Path::new(&self.assets.dir).components().count() > 1 {
            return Err(ConfigError::Validation(format!(
                "assets.dir must be a single directory name, got '{}'",
                self.assets.dir
            )));
        }
        for candidate in &self.install.candidates {
            if candidate.is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "install.candidates entries must be host-relative, got '{}'",
                    candidate.display()
                )));
            }
        }
        if self.install.fallback.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "install.fallback must be host-relative, got '{}'",
                self.install.fallback.display()
            )));
        }
        Ok(())
    }

    /// Get the package root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the package root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the package root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the package root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Absolute path of the packaged asset subtree
    /// (`<root>/<assets.source>/<assets.dir>`).
    pub fn asset_source(&self) -> PathBuf {
        self.root.join(&self.assets.source).join(&self.assets.dir)
    }
}

/// Find config file by searching upward from the current directory.
///
/// An absolute `config_name` is used as-is; a relative one is probed in
/// cwd and every ancestor until the filesystem root.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================
