//! Shared utilities for source normalization.

/// Normalize line endings and BOM so line indices are consistent across platforms.
pub fn normalize_source(text: &str) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    let s = text.replace("\r\n", "\n").replace('\r', "\n");
    match s.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

/// Split normalized source into the line sequence every query indexes into.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
