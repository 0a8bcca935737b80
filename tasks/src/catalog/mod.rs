//! Platform and module catalog for OpenJFX artefacts.
//!
//! The catalog is the single source of truth for which platforms the
//! launcher ships OpenJFX for, which toolkit modules exist, and where the
//! artefacts are published. It is validated once at construction and never
//! mutated afterwards.
//!
//! # Sub-modules
//!
//! - [`detect`] - Host OS/architecture normalisation and platform lookup.
//! - [`platform`] - The [`PlatformDescriptor`] record.

pub mod detect;
pub mod platform;

pub use platform::{DEFAULT_GROUP_ID, PlatformDescriptor};

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Toolkit modules in dependency order.
const OPENJFX_MODULES: &[&str] = &["base", "graphics", "controls", "fxml", "media", "web"];

/// Prefix shared by every OpenJFX artefact id (`javafx-base`, ...).
const OPENJFX_ARTIFACT_PREFIX: &str = "javafx";

/// Maven Central, where the upstream artefacts and their digests live.
const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2";

/// Errors raised when a catalog fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog declares no modules.
    #[error("catalog declares no modules")]
    NoModules,

    /// A module name is empty or whitespace.
    #[error("catalog contains a blank module name")]
    BlankModule,

    /// A module is declared more than once.
    #[error("module {name} is declared more than once")]
    DuplicateModule {
        /// The repeated module name.
        name: String,
    },

    /// A platform has a blank name or classifier.
    #[error("platform {name:?} has a blank {field}")]
    BlankPlatformField {
        /// The platform name as written (may itself be blank).
        name: String,
        /// The offending field.
        field: &'static str,
    },

    /// A platform name is declared more than once.
    #[error("platform {name} is declared more than once")]
    DuplicatePlatform {
        /// The repeated platform name.
        name: String,
    },

    /// A platform excludes a module the catalog does not declare.
    #[error("platform {platform} excludes unknown module {module}")]
    UnknownExclusion {
        /// The platform carrying the exclusion.
        platform: String,
        /// The unknown module name.
        module: String,
    },
}

/// Unvalidated catalog shape, as written in configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default = "default_artifact_prefix")]
    artifact_prefix: String,
    #[serde(default = "default_repository")]
    repository: String,
    modules: Vec<String>,
    platforms: Vec<PlatformDescriptor>,
}

fn default_artifact_prefix() -> String {
    OPENJFX_ARTIFACT_PREFIX.to_owned()
}

fn default_repository() -> String {
    MAVEN_CENTRAL.to_owned()
}

/// The immutable set of platforms and modules to resolve artefacts for.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::Catalog;
///
/// let catalog = Catalog::openjfx();
/// let arm32 = catalog.platform("linux-arm32").expect("known platform");
/// let modules: Vec<&str> = catalog.supported_modules(arm32).collect();
/// assert_eq!(modules, ["base", "graphics", "controls", "fxml"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    artifact_prefix: String,
    repository: String,
    modules: Vec<String>,
    platforms: Vec<PlatformDescriptor>,
}

impl Catalog {
    /// Build a catalog, validating names, uniqueness and exclusions.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first problem found.
    pub fn new(
        artifact_prefix: impl Into<String>,
        repository: impl Into<String>,
        modules: Vec<String>,
        platforms: Vec<PlatformDescriptor>,
    ) -> Result<Self, CatalogError> {
        validate_modules(&modules)?;
        validate_platforms(&modules, &platforms)?;
        Ok(Self {
            artifact_prefix: artifact_prefix.into(),
            repository: repository.into(),
            modules,
            platforms,
        })
    }

    /// The OpenJFX catalog the launcher ships with.
    #[must_use]
    pub fn openjfx() -> Self {
        let platforms = vec![
            PlatformDescriptor::new("windows-x86", "win-x86"),
            PlatformDescriptor::new("windows-x86_64", "win"),
            PlatformDescriptor::new("osx-x86_64", "mac"),
            PlatformDescriptor::new("osx-arm64", "mac-aarch64"),
            PlatformDescriptor::new("linux-x86_64", "linux"),
            PlatformDescriptor::new("linux-arm32", "linux-arm32-monocle")
                .with_excluded_modules(["media", "web"]),
            PlatformDescriptor::new("linux-arm64", "linux-aarch64"),
        ];
        // Satisfies every validation rule; see `openjfx_catalog_is_valid`.
        Self {
            artifact_prefix: default_artifact_prefix(),
            repository: default_repository(),
            modules: OPENJFX_MODULES.iter().map(|m| (*m).to_owned()).collect(),
            platforms,
        }
    }

    /// Prefix used to derive artefact ids (`<prefix>-<module>`).
    #[must_use]
    pub fn artifact_prefix(&self) -> &str {
        &self.artifact_prefix
    }

    /// Base URL of the Maven repository the digests are fetched from.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// All modules in declared order.
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// All platforms in declared order.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformDescriptor] {
        &self.platforms
    }

    /// Look a platform up by name.
    #[must_use]
    pub fn platform(&self, name: &str) -> Option<&PlatformDescriptor> {
        self.platforms.iter().find(|p| p.name() == name)
    }

    /// Modules `platform` supports, in catalog order.
    pub fn supported_modules<'a>(
        &'a self,
        platform: &'a PlatformDescriptor,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.modules
            .iter()
            .map(String::as_str)
            .filter(move |module| platform.supports(module))
    }

    /// Total number of (platform, supported module) pairs.
    #[must_use]
    pub fn artifact_count(&self) -> usize {
        self.platforms
            .iter()
            .map(|p| self.supported_modules(p).count())
            .sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::openjfx()
    }
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.artifact_prefix, raw.repository, raw.modules, raw.platforms)
    }
}

fn validate_modules(modules: &[String]) -> Result<(), CatalogError> {
    if modules.is_empty() {
        return Err(CatalogError::NoModules);
    }
    let mut seen = HashSet::new();
    for module in modules {
        if module.trim().is_empty() {
            return Err(CatalogError::BlankModule);
        }
        if !seen.insert(module.as_str()) {
            return Err(CatalogError::DuplicateModule {
                name: module.clone(),
            });
        }
    }
    Ok(())
}

fn validate_platforms(
    modules: &[String],
    platforms: &[PlatformDescriptor],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for platform in platforms {
        for (field, value) in [
            ("name", platform.name()),
            ("classifier", platform.classifier()),
            ("group id", platform.group_id()),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::BlankPlatformField {
                    name: platform.name().to_owned(),
                    field,
                });
            }
        }
        if !seen.insert(platform.name()) {
            return Err(CatalogError::DuplicatePlatform {
                name: platform.name().to_owned(),
            });
        }
        if let Some(unknown) = platform
            .excluded_modules()
            .iter()
            .find(|excluded| !modules.contains(excluded))
        {
            return Err(CatalogError::UnknownExclusion {
                platform: platform.name().to_owned(),
                module: unknown.clone(),
            });
        }
    }
    Ok(())
}
