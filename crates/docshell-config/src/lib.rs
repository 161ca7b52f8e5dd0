//! Deployment configuration for the documentation shell.
//!
//! Supplies the externally-configured URLs that get substituted into
//! the documentation navigation tree. Values come either straight from
//! process environment variables ([`DeployConfig::from_env`]) or from a
//! `docshell.toml` file with auto-discovery in parent directories
//! ([`DeployConfig::load`]).
//!
//! An unset value is not an error: lookups return `None` and the layout
//! degrades to an inert link. Only malformed files and rejected values
//! fail loading.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A value that expands to the empty string is treated as unset.

mod expand;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docshell.toml";

/// Key addressing an externally-configured URL slot.
///
/// The string form of each key is the exact name of the deployment
/// value that backs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UrlKey {
    /// Notebook tutorial link in the intro section.
    #[serde(rename = "TUTORIAL_COLAB_URL")]
    TutorialColab,
    /// Notebook analysis link in the guides section.
    #[serde(rename = "ANALYSIS_COLAB_URL")]
    AnalysisColab,
}

impl UrlKey {
    /// Exact name of the deployment value backing this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TutorialColab => "TUTORIAL_COLAB_URL",
            Self::AnalysisColab => "ANALYSIS_COLAB_URL",
        }
    }
}

/// Raw `[links]` section as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LinksRaw {
    tutorial_colab_url: Option<String>,
    analysis_colab_url: Option<String>,
}

/// Raw configuration file contents.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    links: LinksRaw,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`links.tutorial_colab_url`").
        field: String,
        /// Error message (e.g., "${`TUTORIAL_COLAB_URL`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Deployment configuration snapshot.
///
/// Read-only from the layout's perspective: the layout borrows it per
/// render and performs no caching, validation, or defaulting of its
/// own. Both URL slots are optional; [`DeployConfig::url`] returns
/// `None` for unset slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeployConfig {
    tutorial_colab_url: Option<String>,
    analysis_colab_url: Option<String>,
}

impl DeployConfig {
    /// Create a configuration with both slots unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a URL slot, returning the updated configuration.
    #[must_use]
    pub fn with_url(mut self, key: UrlKey, url: impl Into<String>) -> Self {
        match key {
            UrlKey::TutorialColab => self.tutorial_colab_url = Some(url.into()),
            UrlKey::AnalysisColab => self.analysis_colab_url = Some(url.into()),
        }
        self
    }

    /// Look up a URL by key.
    ///
    /// Unset slots yield `None`; callers decide how to degrade (the
    /// layout renders an inert link rather than dropping the entry).
    #[must_use]
    pub fn url(&self, key: UrlKey) -> Option<&str> {
        match key {
            UrlKey::TutorialColab => self.tutorial_colab_url.as_deref(),
            UrlKey::AnalysisColab => self.analysis_colab_url.as_deref(),
        }
    }

    /// Read both slots from process environment variables.
    ///
    /// Reads exactly [`UrlKey::as_str`] for each slot. Absent or
    /// non-unicode variables leave the slot unset. No validation is
    /// applied - deployment owns these values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            tutorial_colab_url: std::env::var(UrlKey::TutorialColab.as_str()).ok(),
            analysis_colab_url: std::env::var(UrlKey::AnalysisColab.as_str()).ok(),
        }
    }

    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docshell.toml` in the current directory and
    /// parents, falling back to an empty configuration when no file is
    /// found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or
    /// if parsing, expansion, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Using discovered configuration");
            Self::load_from_file(&discovered)
        } else {
            tracing::debug!("No configuration file found, all link slots unset");
            Ok(Self::default())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: ConfigFile = toml::from_str(&content)?;

        let config = Self {
            tutorial_colab_url: resolve_value(
                raw.links.tutorial_colab_url.as_deref(),
                "links.tutorial_colab_url",
            )?,
            analysis_colab_url: resolve_value(
                raw.links.analysis_colab_url.as_deref(),
                "links.analysis_colab_url",
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Only set slots are checked; absence is never an error.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.tutorial_colab_url {
            require_http_url(url, "links.tutorial_colab_url")?;
        }
        if let Some(ref url) = self.analysis_colab_url {
            require_http_url(url, "links.analysis_colab_url")?;
        }
        Ok(())
    }
}

/// Expand a raw configuration value and normalize empty results to unset.
fn resolve_value(raw: Option<&str>, field: &str) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let expanded = expand::expand_env(raw, field)?;
    if expanded.is_empty() {
        return Ok(None);
    }
    Ok(Some(expanded))
}
