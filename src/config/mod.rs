//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)              |
//! | `[content]` | Content paths, extensions, computed-field knobs |
//! | `[query]`   | Query defaults and the synthetic views factor   |
//! | `[export]`  | JSON export target                              |
//! | `[extra]`   | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Site"
//! description = "Blog and resume"
//! url = "https://example.com"
//!
//! [content]
//! dir = "content"
//! words_per_minute = 200
//!
//! [query]
//! views_per_minute = 100
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod export;
mod query;

pub use base::BaseConfig;
pub use content::{ContentConfig, KindDirs, Routes};
pub use error::ConfigError;
pub use export::ExportConfig;
pub use query::QueryConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root (set after loading)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content sources and computed-field settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Query layer defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// JSON export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Path of the resume data file.
    pub fn resume_path(&self) -> PathBuf {
        self.content.data.join("resume.toml")
    }

    /// Update configuration with CLI arguments and resolve every path
    /// against the project root.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.content.dir, cli.content.as_ref());
        if let Commands::Export { output } = &cli.command {
            Self::update_option(&mut self.export.output, output.as_ref());
        }

        let root = Self::normalize_path(&Self::expand_tilde(&root));
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all configured paths relative to `root`.
    pub fn update_path_with_root(&mut self, root: &Path) {
        self.root = Some(root.to_path_buf());

        let resolve = |path: &Path| Self::normalize_path(&root.join(Self::expand_tilde(path)));
        self.content.dir = resolve(&self.content.dir);
        self.content.data = resolve(&self.content.data);
        self.export.output = resolve(&self.export.output);
    }

    /// Expand a leading `~` to the home directory.
    fn expand_tilde(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.content.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[content.extensions] must have at least one element".into()
            ));
        }

        if let Some(ext) = self.content.extensions.iter().find(|e| e.starts_with('.')) {
            bail!(ConfigError::Validation(format!(
                "[content.extensions] entries must not start with a dot: `{ext}`"
            )));
        }

        if self.content.words_per_minute == 0 {
            bail!(ConfigError::Validation(
                "[content.words_per_minute] must be positive".into()
            ));
        }

        if !self.content.dir.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[content.dir] not found: {}",
                self.content.dir.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
