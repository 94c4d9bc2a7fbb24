//! Scratch workspaces and instance files for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory addressed by a UTF-8 path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// JSON for the four-item reference instance with capacity 7.
pub(super) const REFERENCE_JSON: &str = r#"{
  "capacity": 7,
  "items": [
    { "weight": 2.0, "value": 3.0 },
    { "weight": 3.0, "value": 4.0 },
    { "weight": 4.0, "value": 5.0 },
    { "weight": 5.0, "value": 6.0 }
  ]
}"#;
