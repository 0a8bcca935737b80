//! Gate-driven translation completeness check.
//!
//! The gate locale defines the required key set. Every gate key must exist
//! in the reference bundle and in each other checked locale. Keys that exist
//! elsewhere but not in the gate are never reported, so bundles may carry
//! extra or legacy keys.

use super::LocaleResourceSet;
use std::fmt;

/// A locale bundle with the name used in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedLocale {
    /// Display name, typically the bundle file name.
    pub name: String,
    /// The bundle's entries.
    pub entries: LocaleResourceSet,
}

impl NamedLocale {
    /// Pair a set of entries with a display name.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: LocaleResourceSet) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// A gate key absent from one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissingKey {
    /// Name of the locale lacking the key.
    pub locale: String,
    /// The missing key.
    pub key: String,
}

impl MissingKey {
    /// Build a finding.
    #[must_use]
    pub fn new(locale: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} missing key '{}'", self.locale, self.key)
    }
}

/// Findings of a verification run; empty means every gate key is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    missing: Vec<MissingKey>,
}

impl VerificationReport {
    /// Whether no keys are missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing (locale, key) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    /// Whether the given pair was reported.
    #[must_use]
    pub fn contains(&self, locale: &str, key: &str) -> bool {
        self.missing
            .iter()
            .any(|m| m.locale == locale && m.key == key)
    }

    /// Findings in discovery order: the reference first, then each other
    /// locale in the order given, keys sorted within each.
    #[must_use]
    pub fn missing(&self) -> &[MissingKey] {
        &self.missing
    }
}

impl<'a> IntoIterator for &'a VerificationReport {
    type Item = &'a MissingKey;
    type IntoIter = std::slice::Iter<'a, MissingKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.missing.iter()
    }
}

/// Check every gate key against the reference and the other locales.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::translations::{LocaleResourceSet, NamedLocale, verify};
///
/// let gate: LocaleResourceSet = [("a", "1"), ("b", "2")].into_iter().collect();
/// let reference = NamedLocale::new("reference", [("a", "x")].into_iter().collect());
/// let zh = NamedLocale::new("zh", [("b", "y")].into_iter().collect());
///
/// let report = verify(&reference, &gate, &[zh]);
///
/// assert_eq!(report.len(), 2);
/// assert!(report.contains("reference", "b"));
/// assert!(report.contains("zh", "a"));
/// ```
#[must_use]
pub fn verify(
    reference: &NamedLocale,
    gate: &LocaleResourceSet,
    others: &[NamedLocale],
) -> VerificationReport {
    let missing = std::iter::once(reference)
        .chain(others)
        .flat_map(|locale| {
            gate.keys()
                .filter(|key| !locale.entries.contains_key(key))
                .map(|key| MissingKey::new(locale.name.as_str(), key))
        })
        .collect();
    VerificationReport { missing }
}
