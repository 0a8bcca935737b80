//! Remote fetch capability.
//!
//! All network access in this crate goes through [`RemoteFetcher`] so tests
//! can substitute deterministic stubs and simulate failures without touching
//! the network. [`HttpFetcher`] is the production implementation, backed by a
//! `ureq` agent.

use std::io::Read;
use std::time::Duration;

/// Network timeout applied when no explicit timeout is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for fetching remote resources by URL.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::fetch::HttpFetcher;
///
/// let fetcher = HttpFetcher::default();
/// // Use fetcher.fetch_text("https://...") in production
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait RemoteFetcher {
    /// Fetch `url` and return the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the resource is missing, or the
    /// body cannot be read as text.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;

    /// Fetch `url` and return the raw body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the resource is missing.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Errors arising from remote fetches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request failed or the body could not be read.
    #[error("fetch failed for {url}: {reason}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The resource does not exist (HTTP 404).
    #[error("resource not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },
}

impl FetchError {
    /// The URL the failed request targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. } | Self::NotFound { url } => url,
        }
    }
}

/// HTTP fetcher using `ureq`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with a global per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            timeout,
        }
    }

    /// The configured per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>, FetchError> {
        log::debug!("fetching {url}");
        self.agent
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)?
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Http {
                url: url.to_owned(),
                reason: e.to_string(),
            })
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url)?;
        let mut body = Vec::new();
        response
            .into_body()
            .as_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Http {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(body)
    }
}

/// Map a ureq error to a [`FetchError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(404) => FetchError::NotFound {
            url: url.to_owned(),
        },
        other => FetchError::Http {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
