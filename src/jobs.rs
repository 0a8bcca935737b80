//! Job runners behind each `hmcl-build` command.
//!
//! Runners take their configuration and capabilities explicitly so tests can
//! drive them with stub fetchers and temporary directories. [`dispatch`] wires
//! a parsed command to its runner with the real HTTP fetcher.

use crate::cli::Command;
use crate::config::{BuildConfig, ConfigError, ToolkitConfig, TranslationsConfig};
use camino::Utf8PathBuf;
use hmcl_build_tasks::coordinates::ArtifactCoordinates;
use hmcl_build_tasks::error::TaskError;
use hmcl_build_tasks::fetch::{HttpFetcher, RemoteFetcher};
use hmcl_build_tasks::manifest::{generate, write_manifest};
use hmcl_build_tasks::prefetch::{WarmReport, warm};
use hmcl_build_tasks::translations::BundleLayout;
use std::io::Write;
use thiserror::Error;

/// Errors that make a command exit unsuccessfully.
#[derive(Debug, Error)]
pub enum JobError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A build task failed.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Command output could not be written.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`JobError`].
pub type Result<T> = std::result::Result<T, JobError>;

/// Operating system and architecture names of the machine a job targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostTarget<'a> {
    /// Operating system name, in Rust or JVM spelling.
    pub os: &'a str,
    /// Architecture name, in Rust or JVM spelling.
    pub arch: &'a str,
}

impl HostTarget<'static> {
    /// The machine running this process.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// Run `command` with real network access.
///
/// # Errors
///
/// Returns [`JobError`] when the selected job fails.
pub fn dispatch(command: Command, config: &BuildConfig, stdout: &mut dyn Write) -> Result<()> {
    let fetcher = HttpFetcher::with_timeout(config.toolkit.timeout());
    match command {
        Command::GenerateManifest => {
            run_generate_manifest(&config.toolkit, &fetcher)?;
        }
        Command::WarmCache => {
            run_warm_cache(&config.toolkit, &fetcher);
        }
        Command::CheckTranslations => run_check_translations(&config.translations)?,
        Command::HostCoordinates => {
            run_host_coordinates(&config.toolkit, HostTarget::current(), stdout)?;
        }
    }
    Ok(())
}

/// Resolve every artefact, fetch its digest and write the manifest.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`JobError::Task`] for the first failed digest fetch or a failed
/// write; nothing is written in the first case.
pub fn run_generate_manifest(
    config: &ToolkitConfig,
    fetcher: &dyn RemoteFetcher,
) -> Result<Utf8PathBuf> {
    let catalog = &config.catalog;
    log::info!(
        "resolving {} OpenJFX {} artefacts from {}",
        catalog.artifact_count(),
        config.version,
        catalog.repository()
    );
    let manifest = generate(catalog, &config.version, fetcher).map_err(TaskError::from)?;
    write_manifest(&manifest, &config.output).map_err(TaskError::from)?;
    log::info!(
        "wrote {} records for {} platforms to {}",
        manifest.record_count(),
        manifest.platforms().len(),
        config.output
    );
    Ok(config.output.clone())
}

/// Request every artefact jar through every configured mirror.
///
/// Never fails; failed requests are logged and counted in the report.
pub fn run_warm_cache(config: &ToolkitConfig, fetcher: &dyn RemoteFetcher) -> WarmReport {
    if config.mirrors.is_empty() {
        log::info!("no mirrors configured; nothing to warm");
    }
    let report = warm(&config.catalog, &config.version, &config.mirrors, fetcher);
    log::info!(
        "warmed {} of {} artefact requests across {} mirrors",
        report.succeeded(),
        report.attempted,
        config.mirrors.len()
    );
    report
}

/// Check that every gate-locale key exists in the reference and other
/// bundles, logging each missing key as a warning.
///
/// # Errors
///
/// Returns [`TaskError::Translation`] if a bundle cannot be read, and
/// [`TaskError::MissingTranslations`] after logging when any key is missing.
pub fn run_check_translations(config: &TranslationsConfig) -> Result<()> {
    let layout = BundleLayout::new(&config.directory, config.base_name.as_str());
    let report = layout
        .verify_locales(&config.reference, &config.gate, &config.others)
        .map_err(TaskError::from)?;
    for missing in &report {
        log::warn!("{missing}");
    }
    if !report.is_empty() {
        return Err(TaskError::MissingTranslations {
            count: report.len(),
        }
        .into());
    }
    log::info!(
        "all {} keys are present in {} and {} other locales",
        layout.file_name(&config.gate),
        layout.file_name(&config.reference),
        config.others.len()
    );
    Ok(())
}

/// Write one Maven notation per module supported on `host`.
///
/// # Errors
///
/// Returns [`TaskError::UnsupportedHost`] when no catalog platform matches
/// `host`, and [`JobError::Output`] when writing fails.
pub fn run_host_coordinates(
    config: &ToolkitConfig,
    host: HostTarget<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    let catalog = &config.catalog;
    let platform =
        catalog
            .detect_platform(host.os, host.arch)
            .ok_or_else(|| TaskError::UnsupportedHost {
                os: host.os.to_owned(),
                arch: host.arch.to_owned(),
            })?;
    log::debug!("host {}/{} maps to {platform}", host.os, host.arch);
    for module in catalog.supported_modules(platform) {
        let coordinates = ArtifactCoordinates::resolve(catalog, platform, module, &config.version);
        writeln!(out, "{coordinates}").map_err(|source| JobError::Output { source })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
