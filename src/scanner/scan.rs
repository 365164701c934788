//! Orchestrate scanning: read C# files and report their component classes.

use std::path::Path;

use tracing::{debug, warn};

use super::classes;
use super::files::{is_cs_file, iter_cs_files};
use super::lifecycle::Scanner;
use super::methods::find_all_method_names;
use super::models::{BaseClass, FileReport};
use super::util::{normalize_source, source_lines};
use crate::error::{Error, Result};

/// Read file and normalize for scanning (replacement char, line endings, BOM).
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).replace('\u{fffd}', "?");
    Ok(normalize_source(&text))
}

/// Report the first component class in `source`, or None if the file has none.
pub fn scan_source(path: &Path, source: &str, scanner: &Scanner) -> Option<FileReport> {
    let lines = source_lines(source);
    let header = classes::find_component_class_header(&lines)?;
    let body = classes::locate_component_body(&lines);
    let base = classes::header_base_class(lines[header]).unwrap_or(BaseClass::Unspecified);
    let methods: Vec<String> = find_all_method_names(&lines)
        .into_iter()
        .map(str::to_string)
        .collect();
    let implemented: Vec<String> = scanner
        .implemented_lifecycle_methods(&lines)
        .into_iter()
        .map(|m| m.name.clone())
        .collect();
    let missing = scanner
        .catalog()
        .names()
        .filter(|n| !implemented.iter().any(|i| i == n))
        .map(str::to_string)
        .collect();
    Some(FileReport {
        file: path.to_path_buf(),
        line: u32::try_from(header + 1).unwrap_or(u32::MAX),
        base,
        body,
        methods,
        implemented,
        missing,
    })
}

/// Scan a single .cs file or every .cs file under a directory.
/// Unreadable files are logged and skipped.
pub fn scan_path(
    root: &Path,
    exclude_dirs: Option<&[String]>,
    scanner: &Scanner,
) -> Vec<FileReport> {
    let paths = if root.is_file() {
        if is_cs_file(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        }
    } else {
        iter_cs_files(root, exclude_dirs)
    };
    let mut reports = Vec::new();
    for path in paths {
        let text = match read_source(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };
        match scan_source(&path, &text, scanner) {
            Some(report) => reports.push(report),
            None => debug!(file = %path.display(), "no component class"),
        }
    }
    reports
}
