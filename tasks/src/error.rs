//! Umbrella error type for task runs.
//!
//! Each task module reports its own narrow error. Callers that drive several
//! tasks convert them into [`TaskError`] with `?`.

use crate::catalog::CatalogError;
use crate::fetch::FetchError;
use crate::manifest::ManifestWriteError;
use crate::translations::TranslationError;
use thiserror::Error;

/// Errors that end a task run.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A remote fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The platform catalog is invalid.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The manifest could not be written.
    #[error(transparent)]
    ManifestWrite(#[from] ManifestWriteError),

    /// A locale bundle could not be loaded.
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// Translation verification found gate keys missing elsewhere.
    #[error("Part of the translation is missing ({count} missing keys)")]
    MissingTranslations {
        /// Number of missing (locale, key) pairs.
        count: usize,
    },

    /// No catalog platform matches the running host.
    #[error("unsupported host platform: os '{os}', arch '{arch}'")]
    UnsupportedHost {
        /// Operating system name as reported by the host.
        os: String,
        /// Architecture name as reported by the host.
        arch: String,
    },
}

/// Result type alias using [`TaskError`].
pub type Result<T> = std::result::Result<T, TaskError>;
