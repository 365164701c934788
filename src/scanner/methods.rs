//! Extract `void` method names from C# source lines.

use std::sync::OnceLock;

use regex::Regex;

/// void Name( ... ). Only void-returning declarations are recognized; the name is whatever
/// sits between `void` and the first `(` on the line.
static METHOD_RE: OnceLock<Regex> = OnceLock::new();

fn method_re() -> &'static Regex {
    METHOD_RE.get_or_init(|| Regex::new(r"void *(.*?) *\(.*\)").unwrap())
}

/// Name of the first `void Name(...)` declaration on the line.
pub fn find_method_name(line: &str) -> Option<&str> {
    method_re()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Method names of every line in order; duplicates kept.
pub fn find_all_method_names<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|l| find_method_name(l.as_ref()))
        .collect()
}

/// Build the lifecycle pattern from catalog names, capturing the name. Names are escaped, so a
/// name with regex metacharacters only matches itself. The lazy tail lets several declarations
/// on one line match separately.
pub(crate) fn lifecycle_pattern<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let alternation = names
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    format!(r"void *({alternation}) *\(.*?\)")
}
