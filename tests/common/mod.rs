// Shared helpers for integration tests.
//
// Each test gets its own temporary directory holding model descriptions and
// conversion output, so tests never touch the source tree.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the checked-in TOML fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Path to the fixture named `name`.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// An isolated workspace backed by a [`tempfile::TempDir`].
///
/// The directory is deleted when dropped.
pub struct ConversionContext {
    /// Temporary directory holding inputs and outputs.
    pub root: tempfile::TempDir,
}

impl ConversionContext {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path relative to the workspace root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `content` to `relative` and return its path.
    pub fn write_input(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create input dir");
        }
        std::fs::write(&path, content).expect("write input");
        path
    }

    /// Copy the fixture `name` into the workspace and return its new path.
    pub fn with_fixture(&self, name: &str) -> PathBuf {
        let content = std::fs::read_to_string(fixture(name)).expect("read fixture");
        self.write_input(name, &content)
    }

    /// Read a file produced by a conversion.
    pub fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read output")
    }
}
