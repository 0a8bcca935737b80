//! Build-time jobs for the HMCL launcher.
//!
//! The `hmcl-build` binary wires the [`hmcl_build_tasks`] operations to a
//! command line: it loads [`config::BuildConfig`], installs terminal logging
//! and runs the selected job from [`jobs`].

pub mod cli;
pub mod config;
pub mod jobs;
pub mod logging;

pub use config::{BuildConfig, ConfigError, ToolkitConfig, TranslationsConfig};
pub use jobs::JobError;
