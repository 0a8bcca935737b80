//! Translation completeness checks for the launcher's resource bundles.
//!
//! The launcher keeps its UI strings in `.properties` bundles named
//! `<base>[_<locale>].properties`. One locale acts as the gate: every key it
//! defines must also exist in the reference bundle and in every other
//! checked locale.
//!
//! # Sub-modules
//!
//! - [`properties`] - `.properties` parsing and loading.
//! - [`verify`] - The gate-driven completeness check.

pub mod properties;
pub mod verify;

pub use properties::{LocaleResourceSet, load_properties, parse_properties};
pub use verify::{MissingKey, NamedLocale, VerificationReport, verify};

use camino::{Utf8Path, Utf8PathBuf};

/// Errors arising while loading locale bundles.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// A bundle file could not be read.
    #[error("failed to read locale bundle {path}: {source}")]
    Read {
        /// Path of the bundle.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Locates the bundles of one resource family inside a directory.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use hmcl_build_tasks::translations::BundleLayout;
///
/// let layout = BundleLayout::new(Utf8Path::new("assets/lang"), "I18N");
/// assert_eq!(layout.file_name(""), "I18N.properties");
/// assert_eq!(layout.file_name("zh_CN"), "I18N_zh_CN.properties");
/// assert_eq!(layout.path("zh").as_str(), "assets/lang/I18N_zh.properties");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    directory: Utf8PathBuf,
    base_name: String,
}

impl BundleLayout {
    /// Describe bundles named `<base_name>[_<locale>].properties` in `directory`.
    #[must_use]
    pub fn new(directory: &Utf8Path, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.to_owned(),
            base_name: base_name.into(),
        }
    }

    /// File name of the bundle for `locale`; the empty locale is the root bundle.
    #[must_use]
    pub fn file_name(&self, locale: &str) -> String {
        let tag = locale.trim();
        if tag.is_empty() {
            format!("{}.properties", self.base_name)
        } else {
            format!("{}_{tag}.properties", self.base_name)
        }
    }

    /// Full path of the bundle for `locale`.
    #[must_use]
    pub fn path(&self, locale: &str) -> Utf8PathBuf {
        self.directory.join(self.file_name(locale))
    }

    /// Load the bundle for `locale`, named after its file.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Read`] if the file cannot be read.
    pub fn load(&self, locale: &str) -> Result<NamedLocale, TranslationError> {
        let entries = load_properties(&self.path(locale))?;
        Ok(NamedLocale::new(self.file_name(locale), entries))
    }

    /// Load the reference, gate and other bundles and verify them.
    ///
    /// Bundles are loaded in that order; the first unreadable one aborts the
    /// check before any comparison is made.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Read`] naming the first unreadable bundle.
    pub fn verify_locales<S: AsRef<str>>(
        &self,
        reference: &str,
        gate: &str,
        others: &[S],
    ) -> Result<VerificationReport, TranslationError> {
        let reference_bundle = self.load(reference)?;
        let gate_bundle = self.load(gate)?;
        let other_bundles = others
            .iter()
            .map(|locale| self.load(locale.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(verify(&reference_bundle, &gate_bundle.entries, &other_bundles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with(files: &[(&str, &str)]) -> (tempfile::TempDir, BundleLayout) {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = Utf8Path::from_path(temp.path()).expect("UTF-8 path");
        for (name, body) in files {
            std::fs::write(dir.join(name), body).expect("write bundle");
        }
        let layout = BundleLayout::new(dir, "I18N");
        (temp, layout)
    }

    #[test]
    fn blank_locale_names_the_root_bundle() {
        let layout = BundleLayout::new(Utf8Path::new("lang"), "I18N");
        assert_eq!(layout.file_name("  "), "I18N.properties");
    }

    #[test]
    fn verify_locales_names_findings_by_file() {
        let (_temp, layout) = layout_with(&[
            ("I18N.properties", "a=1\n"),
            ("I18N_zh_CN.properties", "a=1\nb=2\n"),
            ("I18N_zh.properties", "b=2\n"),
        ]);

        let report = layout
            .verify_locales("", "zh_CN", &["zh"])
            .expect("bundles load");

        assert_eq!(report.len(), 2);
        assert!(report.contains("I18N.properties", "b"));
        assert!(report.contains("I18N_zh.properties", "a"));
    }

    #[test]
    fn verify_locales_fails_on_missing_gate() {
        let (_temp, layout) = layout_with(&[("I18N.properties", "a=1\n")]);

        let err = layout
            .verify_locales::<&str>("", "zh_CN", &[])
            .expect_err("gate bundle is missing");

        assert!(err.to_string().contains("I18N_zh_CN.properties"), "{err}");
    }
}
