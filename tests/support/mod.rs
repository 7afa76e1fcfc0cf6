//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use stackscout::{run_discover, DiscoverOptions, Report};
use tempfile::TempDir;

/// A throwaway project tree built file by file.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create fixture tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file, creating parent directories as needed.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parents");
        }
        fs::write(path, content).expect("write fixture file");
        self
    }

    /// Creates a directory (and parents).
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(rel)).expect("create fixture dir");
        self
    }
}

/// Runs discovery against a fixture root on a private runtime.
pub fn discover_at(root: &Path) -> Report {
    let opts = DiscoverOptions {
        toolkit_root: root.join(".stackscout"),
        project_root: root.to_path_buf(),
    };
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build runtime")
        .block_on(run_discover(&opts))
}

/// Report as a JSON value with the timestamp removed, for structural
/// comparison between runs.
pub fn stable_json(report: &Report) -> serde_json::Value {
    let mut value = serde_json::to_value(report).expect("serialize report");
    value
        .as_object_mut()
        .expect("report is an object")
        .remove("generatedAt");
    value
}
