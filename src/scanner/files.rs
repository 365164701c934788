//! File system traversal for C# sources.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Directories Unity generates that never hold project scripts.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["Library", "Temp", "obj"];

/// Normalize **/name or path/name to just the directory name (e.g. **/Library -> Library).
pub fn normalize_exclude_dir(pattern: &str) -> String {
    let normalized = pattern.replace('\\', "/");
    let name = normalized.trim_end_matches('/');
    name.rsplit('/').next().unwrap_or(name).to_string()
}

/// True if the file name ends with `.cs` (case-insensitive).
pub fn is_cs_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_lowercase().ends_with(".cs"))
}

fn walk_files_rec(dir_path: &Path, exclude_dirs: &HashSet<String>, result: &mut Vec<PathBuf>) {
    let read_dir = match fs::read_dir(dir_path) {
        Ok(rd) => rd,
        Err(err) => {
            debug!(dir = %dir_path.display(), %err, "skipping unreadable directory");
            return;
        }
    };
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in read_dir.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            dirs.push(path);
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        } else if file_type.is_symlink() {
            // Directory symlinks are not followed.
            debug!(link = %path.display(), "skipping symlinked directory");
        }
    }
    dirs.sort();
    files.sort();
    trace!(dir = %dir_path.display(), dirs = dirs.len(), files = files.len(), "walk");
    result.extend(files.into_iter().filter(|p| is_cs_file(p)));
    for d in &dirs {
        let excluded = d
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| exclude_dirs.contains(n));
        if excluded {
            debug!(dir = %d.display(), "excluded");
            continue;
        }
        walk_files_rec(d, exclude_dirs, result);
    }
}

/// Recursively collect all .cs files under root, sorted per directory.
/// `exclude_dirs` of None means [`DEFAULT_EXCLUDE_DIRS`].
pub fn iter_cs_files(root: &Path, exclude_dirs: Option<&[String]>) -> Vec<PathBuf> {
    let excluded: HashSet<String> = match exclude_dirs {
        Some(dirs) => dirs.iter().map(|p| normalize_exclude_dir(p)).collect(),
        None => DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
    };
    if !root.is_dir() {
        return Vec::new();
    }
    let mut result = Vec::new();
    walk_files_rec(root, &excluded, &mut result);
    debug!(root = %root.display(), found = result.len(), "collected .cs files");
    result
}
