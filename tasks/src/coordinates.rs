//! Maven coordinates for OpenJFX module artefacts.
//!
//! Builds the deterministic `group:artifact:version:classifier` identity of
//! each module artefact and the repository URLs derived from it, following
//! the standard Maven repository layout:
//! `<repo>/<group path>/<artifact>/<version>/<artifact>-<version>-<classifier>.<ext>`.

use crate::catalog::{Catalog, PlatformDescriptor};
use std::fmt;

/// Extension of the primary artefact.
pub const JAR_EXTENSION: &str = "jar";

/// Extension of the SHA-1 digest side-file published next to each jar.
pub const DIGEST_EXTENSION: &str = "jar.sha1";

/// The Maven identity of one module artefact on one platform.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::Catalog;
/// use hmcl_build_tasks::coordinates::ArtifactCoordinates;
///
/// let catalog = Catalog::openjfx();
/// let platform = catalog.platform("linux-x86_64").expect("known platform");
/// let coords = ArtifactCoordinates::resolve(&catalog, platform, "base", "17");
///
/// assert_eq!(coords.to_string(), "org.openjfx:javafx-base:17:linux");
/// assert_eq!(
///     coords.digest_url(catalog.repository()),
///     "https://repo1.maven.org/maven2/org/openjfx/javafx-base/17/javafx-base-17-linux.jar.sha1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: String,
    module_name: String,
}

impl ArtifactCoordinates {
    /// Resolve the coordinates of `module` for `platform`.
    #[must_use]
    pub fn resolve(
        catalog: &Catalog,
        platform: &PlatformDescriptor,
        module: &str,
        version: &str,
    ) -> Self {
        let prefix = catalog.artifact_prefix();
        Self {
            group_id: platform.group_id().to_owned(),
            artifact_id: format!("{prefix}-{module}"),
            version: version.to_owned(),
            classifier: platform.classifier().to_owned(),
            module_name: format!("{prefix}.{module}"),
        }
    }

    /// Maven group id.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Maven artefact id, e.g. `javafx-graphics`.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Artefact version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Platform classifier.
    #[must_use]
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    /// Runtime module name, e.g. `javafx.graphics`.
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Repository-relative path of the artefact with the given extension.
    #[must_use]
    pub fn path(&self, extension: &str) -> String {
        let group_path = self.group_id.replace('.', "/");
        let Self {
            artifact_id,
            version,
            classifier,
            ..
        } = self;
        format!("{group_path}/{artifact_id}/{version}/{artifact_id}-{version}-{classifier}.{extension}")
    }

    /// Absolute URL of the artefact with `extension` under `repository`.
    #[must_use]
    pub fn url(&self, repository: &str, extension: &str) -> String {
        format!("{}/{}", repository.trim_end_matches('/'), self.path(extension))
    }

    /// URL of the jar itself.
    #[must_use]
    pub fn jar_url(&self, repository: &str) -> String {
        self.url(repository, JAR_EXTENSION)
    }

    /// URL of the SHA-1 digest side-file.
    #[must_use]
    pub fn digest_url(&self, repository: &str) -> String {
        self.url(repository, DIGEST_EXTENSION)
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.classifier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coords(platform: &str, module: &str) -> ArtifactCoordinates {
        let catalog = Catalog::openjfx();
        let descriptor = catalog.platform(platform).expect("known platform");
        ArtifactCoordinates::resolve(&catalog, descriptor, module, "17")
    }

    #[test]
    fn artifact_and_module_names_use_prefix() {
        let c = coords("osx-arm64", "controls");
        assert_eq!(c.artifact_id(), "javafx-controls");
        assert_eq!(c.module_name(), "javafx.controls");
        assert_eq!(c.classifier(), "mac-aarch64");
        assert_eq!(c.group_id(), "org.openjfx");
        assert_eq!(c.version(), "17");
    }

    #[rstest]
    #[case::no_slash("https://repo.example.test/maven2")]
    #[case::trailing_slash("https://repo.example.test/maven2/")]
    fn url_ignores_trailing_slash(#[case] repository: &str) {
        let url = coords("windows-x86", "web").jar_url(repository);
        assert_eq!(
            url,
            "https://repo.example.test/maven2/org/openjfx/javafx-web/17/javafx-web-17-win-x86.jar"
        );
    }

    #[test]
    fn group_dots_become_path_segments() {
        let catalog = Catalog::openjfx();
        let platform = crate::catalog::PlatformDescriptor::new("linux-riscv64", "linux-riscv64")
            .with_group_id("org.glavo.hmcl.openjfx");
        let c = ArtifactCoordinates::resolve(&catalog, &platform, "fxml", "17.0.2");
        assert_eq!(
            c.path(DIGEST_EXTENSION),
            "org/glavo/hmcl/openjfx/javafx-fxml/17.0.2/javafx-fxml-17.0.2-linux-riscv64.jar.sha1"
        );
    }

    #[test]
    fn display_is_maven_notation() {
        assert_eq!(
            coords("linux-arm32", "graphics").to_string(),
            "org.openjfx:javafx-graphics:17:linux-arm32-monocle"
        );
    }
}
