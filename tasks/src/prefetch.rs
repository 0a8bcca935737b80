//! Mirror cache warming.
//!
//! Mirrors such as the Aliyun Maven proxy only cache an artefact once someone
//! has asked for it. Requesting every jar the manifest references through
//! each mirror means the launcher's later downloads are served from cache.
//!
//! Warming is best-effort: a failed request is logged and skipped, and the
//! run as a whole never fails. Callers receive a [`WarmReport`] describing
//! what happened.

use crate::catalog::Catalog;
use crate::coordinates::ArtifactCoordinates;
use crate::fetch::RemoteFetcher;

/// A single request that did not succeed during warming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmFailure {
    /// The URL that was requested.
    pub url: String,
    /// Why the request failed.
    pub reason: String,
}

/// The outcome of a warming run.
///
/// This is deliberately not a `Result`: individual failures are recorded
/// here and the run itself always completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarmReport {
    /// Number of requests made.
    pub attempted: usize,
    /// Requests that failed, in request order.
    pub failures: Vec<WarmFailure>,
}

impl WarmReport {
    /// Number of requests that succeeded.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.attempted.saturating_sub(self.failures.len())
    }
}

/// Request every supported artefact jar through every mirror.
///
/// Mirrors are visited in order; within a mirror, platforms and modules
/// follow catalog order. Response bodies are discarded.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::catalog::Catalog;
/// use hmcl_build_tasks::fetch::{FetchError, RemoteFetcher};
/// use hmcl_build_tasks::prefetch::warm;
///
/// struct Offline;
///
/// impl RemoteFetcher for Offline {
///     fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
///         Err(FetchError::NotFound { url: url.to_owned() })
///     }
///     fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
///         Err(FetchError::NotFound { url: url.to_owned() })
///     }
/// }
///
/// let catalog = Catalog::openjfx();
/// let mirrors = ["https://mirror.example.test/maven".to_owned()];
/// let report = warm(&catalog, "17", &mirrors, &Offline);
/// assert_eq!(report.attempted, catalog.artifact_count());
/// assert_eq!(report.succeeded(), 0);
/// ```
pub fn warm(
    catalog: &Catalog,
    version: &str,
    mirrors: &[String],
    fetcher: &dyn RemoteFetcher,
) -> WarmReport {
    let mut report = WarmReport::default();
    for mirror in mirrors {
        for platform in catalog.platforms() {
            for module in catalog.supported_modules(platform) {
                let coordinates = ArtifactCoordinates::resolve(catalog, platform, module, version);
                let url = coordinates.jar_url(mirror);
                report.attempted += 1;
                if let Err(err) = fetcher.fetch_bytes(&url) {
                    log::warn!("failed to pre-touch {url}: {err}");
                    report.failures.push(WarmFailure {
                        url,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
    report
}
