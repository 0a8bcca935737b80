//! Shared test utilities for the tasks crate.

use crate::catalog::{Catalog, PlatformDescriptor};
use crate::fetch::{FetchError, RemoteFetcher};
use std::cell::RefCell;
use std::collections::HashSet;

/// A deterministic [`RemoteFetcher`] for tests.
///
/// Serves a fixed body for every URL except those registered as failing,
/// and records every URL it is asked for, in order.
#[derive(Debug, Default)]
pub struct StubFetcher {
    body: String,
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl StubFetcher {
    /// Creates a stub that answers every request with `body`.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Makes requests for `url` fail with an HTTP error.
    #[must_use]
    pub fn failing_on(mut self, url: impl Into<String>) -> Self {
        self.failing.insert(url.into());
        self
    }

    /// Every URL requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn respond(&self, url: &str) -> Result<&str, FetchError> {
        self.calls.borrow_mut().push(url.to_owned());
        if self.failing.contains(url) {
            return Err(FetchError::Http {
                url: url.to_owned(),
                reason: "stubbed failure".to_owned(),
            });
        }
        Ok(&self.body)
    }
}

impl RemoteFetcher for StubFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.respond(url).map(str::to_owned)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.respond(url).map(|body| body.as_bytes().to_vec())
    }
}

/// A catalog with a single platform and a single module.
pub fn single_entry_catalog() -> Catalog {
    Catalog::new(
        "javafx",
        "https://repo.example.test/maven2",
        vec!["base".to_owned()],
        vec![PlatformDescriptor::new("linux-x86_64", "linux")],
    )
    .unwrap_or_else(|err| panic!("single-entry catalog is valid: {err}"))
}
