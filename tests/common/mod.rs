//! Shared test helpers.

use std::path::PathBuf;

use ulscan::scanner::{LifecycleCatalog, LifecycleMessage, Scanner};

/// Create a temp dir and write files. Returns (guard, root). Paths are relative to root; parent dirs are created.
#[allow(dead_code)]
pub fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

/// Scanner over a small catalog of the given names.
#[allow(dead_code)]
pub fn scanner_with(names: &[&str]) -> Scanner {
    let catalog: LifecycleCatalog = names
        .iter()
        .map(|n| LifecycleMessage {
            name: n.to_string(),
            description: String::new(),
        })
        .collect();
    Scanner::new(catalog).unwrap()
}
