//! Build job configuration loaded from `hmcl-build.toml`.
//!
//! Every table and field is optional. Omitted values fall back to the
//! launcher's standard layout, so the jobs run without any configuration file
//! at all:
//!
//! ```toml
//! [toolkit]
//! version = "17"
//! output = "HMCL/build/openjfx-dependencies.json"
//! mirrors = ["https://maven.aliyun.com/repository/central"]
//! timeout_secs = 30
//!
//! [translations]
//! directory = "HMCL/src/main/resources/assets/lang"
//! base_name = "I18N"
//! gate = "zh_CN"
//! others = ["zh"]
//! reference = ""
//! ```
//!
//! A `[toolkit.catalog]` table replaces the built-in OpenJFX catalog.

use camino::{Utf8Path, Utf8PathBuf};
use hmcl_build_tasks::catalog::Catalog;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "hmcl-build.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("invalid configuration {path}: {source}")]
    Parse {
        /// Path of the file.
        path: Utf8PathBuf,
        /// Parser diagnostics.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A field that must carry text was blank.
    #[error("configuration field {field} must not be blank")]
    Blank {
        /// Dotted name of the field.
        field: &'static str,
    },

    /// The network timeout was zero.
    #[error("toolkit.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Top-level configuration for every build job.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Settings for manifest generation and cache warming.
    pub toolkit: ToolkitConfig,
    /// Settings for the translation check.
    pub translations: TranslationsConfig,
}

impl BuildConfig {
    /// Load configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// the working directory is used when present and the built-in defaults
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chosen file cannot be read, parsed or
    /// validated.
    pub fn load(explicit: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Utf8Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from(default_path)
                } else {
                    log::debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or
    /// validated.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::parse(path, &source)?;
        log::debug!("loaded configuration from {path}");
        Ok(config)
    }

    /// Parse and validate TOML text; `origin` names it in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and the validation
    /// variants for out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use hmcl_build::config::BuildConfig;
    ///
    /// let config = BuildConfig::parse(Utf8Path::new("inline"), "[toolkit]\nversion = \"21\"\n")
    ///     .expect("valid configuration");
    /// assert_eq!(config.toolkit.version, "21");
    /// assert_eq!(config.translations.gate, "zh_CN");
    /// ```
    pub fn parse(origin: &Utf8Path, source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|err| ConfigError::Parse {
            path: origin.to_owned(),
            source: Box::new(err),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.toolkit.version.trim().is_empty() {
            return Err(ConfigError::Blank {
                field: "toolkit.version",
            });
        }
        if self.toolkit.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.translations.base_name.trim().is_empty() {
            return Err(ConfigError::Blank {
                field: "translations.base_name",
            });
        }
        if self.translations.gate.trim().is_empty() {
            return Err(ConfigError::Blank {
                field: "translations.gate",
            });
        }
        Ok(())
    }
}

/// The `[toolkit]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// OpenJFX release to resolve.
    pub version: String,
    /// Where the manifest is written.
    pub output: Utf8PathBuf,
    /// Mirror base URLs to warm, in order.
    pub mirrors: Vec<String>,
    /// Per-request network timeout in seconds.
    pub timeout_secs: u64,
    /// Platforms, modules and repository to resolve against.
    pub catalog: Catalog,
}

impl ToolkitConfig {
    /// The per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            version: "17".to_owned(),
            output: Utf8PathBuf::from("HMCL/build/openjfx-dependencies.json"),
            mirrors: vec!["https://maven.aliyun.com/repository/central".to_owned()],
            timeout_secs: 30,
            catalog: Catalog::openjfx(),
        }
    }
}

/// The `[translations]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationsConfig {
    /// Directory holding the bundles.
    pub directory: Utf8PathBuf,
    /// Bundle family name, e.g. `I18N`.
    pub base_name: String,
    /// Locale whose keys every other bundle must define.
    pub gate: String,
    /// Locales checked against the gate besides the reference.
    pub others: Vec<String>,
    /// Locale of the reference bundle; empty means the root bundle.
    pub reference: String,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            directory: Utf8PathBuf::from("HMCL/src/main/resources/assets/lang"),
            base_name: "I18N".to_owned(),
            gate: "zh_CN".to_owned(),
            others: vec!["zh".to_owned()],
            reference: String::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
