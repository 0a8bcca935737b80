//! OpenJFX dependency manifest generation.
//!
//! The launcher downloads OpenJFX at runtime on platforms where the JRE does
//! not bundle it. To do so safely it needs, for its own platform, the exact
//! Maven coordinates of every toolkit module together with the SHA-1 digest
//! published by the repository. This module produces that data for every
//! platform in a [`Catalog`] and serializes it as pretty-printed JSON:
//!
//! ```json
//! {
//!   "windows-x86": [
//!     {
//!       "module": "javafx.base",
//!       "groupId": "org.openjfx",
//!       "artifactId": "javafx-base",
//!       "version": "17",
//!       "classifier": "win-x86",
//!       "sha1": "..."
//!     }
//!   ]
//! }
//! ```
//!
//! Generation is fail-fast: the first digest that cannot be fetched aborts
//! the whole run, and nothing is written.

use crate::catalog::Catalog;
use crate::coordinates::ArtifactCoordinates;
use crate::fetch::{FetchError, RemoteFetcher};
use camino::{Utf8Path, Utf8PathBuf};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::io::Write;

/// One module artefact needed at runtime on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleArtifactRecord {
    /// Runtime module name, e.g. `javafx.base`.
    pub module: String,
    /// Maven group id.
    pub group_id: String,
    /// Maven artefact id.
    pub artifact_id: String,
    /// Artefact version.
    pub version: String,
    /// Platform classifier.
    pub classifier: String,
    /// Digest text exactly as served by the repository.
    #[serde(rename = "sha1")]
    pub digest: String,
}

impl ModuleArtifactRecord {
    /// Build a record from resolved coordinates and a fetched digest.
    #[must_use]
    pub fn new(coordinates: &ArtifactCoordinates, digest: String) -> Self {
        Self {
            module: coordinates.module_name().to_owned(),
            group_id: coordinates.group_id().to_owned(),
            artifact_id: coordinates.artifact_id().to_owned(),
            version: coordinates.version().to_owned(),
            classifier: coordinates.classifier().to_owned(),
            digest,
        }
    }
}

/// Records for one platform, in catalog module order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformArtifacts {
    /// Platform name.
    pub platform: String,
    /// One record per supported module.
    pub records: Vec<ModuleArtifactRecord>,
}

/// Platform name to module records, in catalog platform order.
///
/// Serializes as a JSON object whose keys keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    platforms: Vec<PlatformArtifacts>,
}

impl Manifest {
    /// Per-platform entries in catalog order.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformArtifacts] {
        &self.platforms
    }

    /// Records for the named platform.
    #[must_use]
    pub fn records_for(&self, platform: &str) -> Option<&[ModuleArtifactRecord]> {
        self.platforms
            .iter()
            .find(|entry| entry.platform == platform)
            .map(|entry| entry.records.as_slice())
    }

    /// Total number of records across all platforms.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.platforms.iter().map(|entry| entry.records.len()).sum()
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestWriteError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ManifestWriteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.platforms.len()))?;
        for entry in &self.platforms {
            map.serialize_entry(&entry.platform, &entry.records)?;
        }
        map.end()
    }
}

/// Errors arising when writing a manifest file.
#[derive(Debug, thiserror::Error)]
pub enum ManifestWriteError {
    /// JSON serialization failed.
    #[error("manifest serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Creating directories or writing the file failed.
    #[error("failed to write manifest to {path}: {source}")]
    Io {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Resolve every (platform, supported module) artefact in `catalog` and
/// fetch its digest.
///
/// # Errors
///
/// Returns the first [`FetchError`]; no partial manifest is produced.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::Catalog;
/// use hmcl_build_tasks::fetch::{FetchError, RemoteFetcher};
/// use hmcl_build_tasks::manifest::generate;
///
/// struct Fixed;
///
/// impl RemoteFetcher for Fixed {
///     fn fetch_text(&self, _url: &str) -> Result<String, FetchError> {
///         Ok("da39a3ee5e6b4b0d3255bfef95601890afd80709".to_owned())
///     }
///     fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let catalog = Catalog::openjfx();
/// let manifest = generate(&catalog, "17", &Fixed).expect("stub never fails");
/// assert_eq!(manifest.record_count(), catalog.artifact_count());
/// ```
pub fn generate(
    catalog: &Catalog,
    version: &str,
    fetcher: &dyn RemoteFetcher,
) -> Result<Manifest, FetchError> {
    let mut platforms = Vec::with_capacity(catalog.platforms().len());
    for platform in catalog.platforms() {
        let records = catalog
            .supported_modules(platform)
            .map(|module| {
                let coordinates = ArtifactCoordinates::resolve(catalog, platform, module, version);
                let digest = fetcher.fetch_text(&coordinates.digest_url(catalog.repository()))?;
                Ok(ModuleArtifactRecord::new(&coordinates, digest))
            })
            .collect::<Result<Vec<_>, FetchError>>()?;
        log::debug!("resolved {} artefacts for {}", records.len(), platform.name());
        platforms.push(PlatformArtifacts {
            platform: platform.name().to_owned(),
            records,
        });
    }
    Ok(Manifest { platforms })
}

/// Write `manifest` to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed and an existing file is
/// replaced. The content is staged in a temporary file beside the target and
/// renamed into place, so readers never observe a partial manifest.
///
/// # Errors
///
/// Returns [`ManifestWriteError`] if serialization or any I/O step fails.
pub fn write_manifest(manifest: &Manifest, path: &Utf8Path) -> Result<(), ManifestWriteError> {
    let json = manifest.to_json()?;
    let io_error = |source| ManifestWriteError::Io {
        path: path.to_owned(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_error)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(io_error)?;
    staged.write_all(json.as_bytes()).map_err(io_error)?;
    staged.flush().map_err(io_error)?;
    staged.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
