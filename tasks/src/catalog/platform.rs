//! Platform descriptors for OpenJFX artefact resolution.

use serde::Deserialize;
use std::fmt;

/// Maven group shared by every upstream OpenJFX artefact.
pub const DEFAULT_GROUP_ID: &str = "org.openjfx";

fn default_group_id() -> String {
    DEFAULT_GROUP_ID.to_owned()
}

/// One operating system / architecture combination the launcher supports.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::PlatformDescriptor;
///
/// let platform = PlatformDescriptor::new("linux-arm32", "linux-arm32-monocle")
///     .with_excluded_modules(["media", "web"]);
/// assert_eq!(platform.group_id(), "org.openjfx");
/// assert!(!platform.supports("web"));
/// assert!(platform.supports("base"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformDescriptor {
    name: String,
    classifier: String,
    #[serde(default = "default_group_id")]
    group_id: String,
    #[serde(default)]
    excluded_modules: Vec<String>,
}

impl PlatformDescriptor {
    /// Create a descriptor in the default OpenJFX group with no exclusions.
    #[must_use]
    pub fn new(name: impl Into<String>, classifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classifier: classifier.into(),
            group_id: default_group_id(),
            excluded_modules: Vec::new(),
        }
    }

    /// Replace the Maven group id.
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    /// Mark modules as unavailable on this platform.
    #[must_use]
    pub fn with_excluded_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_modules
            .extend(modules.into_iter().map(Into::into));
        self
    }

    /// Platform identifier, e.g. `linux-x86_64`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repository classifier, e.g. `linux-aarch64`.
    #[must_use]
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    /// Maven group id.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Modules this platform does not ship.
    #[must_use]
    pub fn excluded_modules(&self) -> &[String] {
        &self.excluded_modules
    }

    /// Whether `module` is available on this platform.
    #[must_use]
    pub fn supports(&self, module: &str) -> bool {
        !self.excluded_modules.iter().any(|m| m == module)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.classifier)
    }
}
