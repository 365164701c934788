//! Class header matching: component classes, generic class lines, and the base class of the
//! class enclosing a line.

use std::sync::OnceLock;

use regex::Regex;

use super::braces::{find_enclosing_opener, find_matching_closing_brace, find_opening_brace};
use super::models::{BaseClass, ComponentBody};

/// Base types that make a class a Unity component.
pub const COMPONENT_BASES: [&str; 2] = ["MonoBehaviour", "NetworkBehaviour"];

/// class Name followed by whitespace, comma, `{` or end of line.
static CLASS_RE: OnceLock<Regex> = OnceLock::new();

/// class ... : Base, capturing Base. Greedy `.*` binds to the last colon on the line.
static BASE_CLASS_RE: OnceLock<Regex> = OnceLock::new();

/// class ... : MonoBehaviour | NetworkBehaviour on one physical line.
static COMPONENT_RE: OnceLock<Regex> = OnceLock::new();

fn class_re() -> &'static Regex {
    CLASS_RE.get_or_init(|| Regex::new(r"class\s*(.*?)(?:[\s,{]|$)").unwrap())
}

fn base_class_re() -> &'static Regex {
    BASE_CLASS_RE.get_or_init(|| Regex::new(r"class.*:\s*([^\s,{]+)").unwrap())
}

fn component_re() -> &'static Regex {
    COMPONENT_RE.get_or_init(|| {
        let bases = COMPONENT_BASES.join("|");
        Regex::new(&format!(r"class.*:\s*(?:{bases})")).unwrap()
    })
}

/// Quotes, semicolons and closing braces mean the upward walk left the class header region.
fn breaks_header_region(line: &str) -> bool {
    line.contains(['"', '\'', ';', '}'])
}

/// True if `name` is one of the two component base types.
pub fn is_component_base(name: &str) -> bool {
    COMPONENT_BASES.contains(&name)
}

/// Base class declared by a class header line; None if the line is not a class header.
pub fn header_base_class(line: &str) -> Option<BaseClass> {
    if !class_re().is_match(line) {
        return None;
    }
    let base = base_class_re()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| BaseClass::Named(m.as_str().to_string()))
        .unwrap_or(BaseClass::Unspecified);
    Some(base)
}

/// Base class of the class textually enclosing `line`.
///
/// Returns None when there is no usable class context: `line` out of bounds, no enclosing
/// opener, or a quote / `;` / `}` met while looking for the class header above the opener.
/// A plain `class Foo` yields [`BaseClass::Unspecified`].
pub fn enclosing_base_class<S: AsRef<str>>(lines: &[S], line: usize) -> Option<BaseClass> {
    if line >= lines.len() {
        return None;
    }
    let opener = find_enclosing_opener(lines, line)?;
    for candidate in lines[..=opener].iter().rev() {
        let candidate = candidate.as_ref();
        if breaks_header_region(candidate) {
            return None;
        }
        if let Some(base) = header_base_class(candidate) {
            return Some(base);
        }
    }
    None
}

/// First line declaring a class that derives from a component base on the same line.
pub fn find_component_class_header<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .position(|l| component_re().is_match(l.as_ref()))
}

/// First line containing "class" anywhere.
pub fn find_generic_class_header<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines.iter().position(|l| l.as_ref().contains("class"))
}

/// Header, opening and closing lines of the first component class, if all three resolve.
pub fn locate_component_body<S: AsRef<str>>(lines: &[S]) -> Option<ComponentBody> {
    let header = find_component_class_header(lines)?;
    let open = find_opening_brace(lines, header)?;
    let close = find_matching_closing_brace(lines, open)?;
    Some(ComponentBody {
        header,
        open,
        close,
    })
}

/// True if `line` lies strictly between the component body's braces.
pub fn is_in_component_body<S: AsRef<str>>(lines: &[S], line: usize) -> bool {
    locate_component_body(lines).is_some_and(|body| body.contains(line))
}
