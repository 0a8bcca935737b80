//! Build tasks for the HMCL launcher.
//!
//! This crate holds the logic behind the launcher's build-time jobs: resolving
//! OpenJFX artefact coordinates for every supported platform, producing the
//! dependency manifest the launcher downloads at runtime, warming mirror
//! caches, and checking that translations are complete. Every operation takes
//! its inputs explicitly; configuration loading and process wiring live in
//! the `hmcl-build` binary crate.
//!
//! # Modules
//!
//! - [`catalog`] - Platform and module catalog, plus host platform detection
//! - [`coordinates`] - Maven coordinates and repository URL construction
//! - [`error`] - Umbrella error type for task runs
//! - [`fetch`] - Remote fetch capability and its HTTP implementation
//! - [`manifest`] - Dependency manifest generation and serialization
//! - [`prefetch`] - Best-effort mirror cache warming
//! - [`translations`] - Properties loading and translation completeness checks

pub mod catalog;
pub mod coordinates;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod prefetch;
pub mod translations;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
