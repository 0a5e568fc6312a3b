//! Corpus configuration management for `standoc.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[base]`  | Corpus metadata (title, DD version)              |
//! | `[build]` | Build paths and rendering knobs                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "WEST Standard Names"
//! dd_version = "4.0.0"
//!
//! [build]
//! names = "standard_names"
//! output = "docs"
//! clean = false
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use crate::cli::{Cli, Commands};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing standoc.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Corpus metadata
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

/// `[base]` section - corpus metadata stamped into rendered pages.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BaseConfig {
    /// Corpus title used as the index page heading.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Data-dictionary version identifier, stamped into the index footer.
    /// Opaque string; omitted from output when unset.
    #[serde(default = "defaults::base::dd_version")]
    #[educe(Default = defaults::base::dd_version())]
    pub dd_version: Option<String>,
}

/// `[build]` section - paths and rendering configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Standard-name definitions directory (YAML files, one record each).
    #[serde(default = "defaults::build::names")]
    #[educe(Default = defaults::build::names())]
    pub names: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Maximum description length in overview/table cells before truncation.
    #[serde(default = "defaults::build::description_limit")]
    #[educe(Default = defaults::build::description_limit())]
    pub description_limit: usize,
}

// ============================================================================
// Loading and Validation
// ============================================================================

impl CorpusConfig {
    /// Load configuration from a standoc.toml file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply CLI argument overrides on top of the loaded file.
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        if let Some(names) = &cli.names {
            self.build.names = names.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        if let Commands::Build { clean: true } = cli.command {
            self.build.clean = true;
        }

        // Resolve paths relative to the project root
        let root = self.get_root();
        if self.build.names.is_relative() {
            self.build.names = root.join(&self.build.names);
        }
        if self.build.output.is_relative() {
            self.build.output = root.join(&self.build.output);
        }
    }

    /// Project root directory (from CLI, falling back to the config file's parent).
    pub fn get_root(&self) -> PathBuf {
        if let Some(root) = self.cli.and_then(|c| c.root.clone()) {
            return root;
        }
        self.config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("./"))
    }

    /// Validate config state before running a command.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.build.names.is_dir() {
            return Err(ConfigError::Validation(format!(
                "names directory not found: {}",
                self.build.names.display()
            )));
        }
        if self.build.description_limit < 4 {
            return Err(ConfigError::Validation(
                "description_limit must be at least 4".into(),
            ));
        }
        Ok(())
    }
}
