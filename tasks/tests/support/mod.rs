//! Test support utilities for task behaviour tests.
//!
//! Provides a temporary working area where manifests are written and locale
//! bundles are laid out the way the launcher keeps them.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory addressed with UTF-8 paths.
pub struct Workspace {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("UTF-8 temp path");
        Self { _temp: temp, root }
    }

    /// Root of the workspace.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes a bundle file named `file_name` under `dir`, one `key=value`
    /// line per key.
    pub fn write_bundle<S: AsRef<str>>(&self, dir: &str, file_name: &str, keys: &[S]) -> Utf8PathBuf {
        let directory = self.root.join(dir);
        std::fs::create_dir_all(&directory).expect("create bundle directory");
        let body: String = keys
            .iter()
            .map(|key| format!("{}=text\n", key.as_ref()))
            .collect();
        let path = directory.join(file_name);
        std::fs::write(&path, body).expect("write bundle");
        path
    }
}

/// Splits a comma-separated step argument into trimmed, non-empty keys.
pub fn key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .collect()
}
