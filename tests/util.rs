//! Integration tests for normalize_source and source_lines.

use ulscan::scanner::util::{normalize_source, source_lines};

#[test]
fn normalize_source_empty() {
    assert_eq!(normalize_source(""), "");
}

#[test]
fn normalize_source_bom_and_crlf() {
    let text = normalize_source("\u{feff}class A : MonoBehaviour\r\n{\r\n}\r\n");
    assert_eq!(
        source_lines(&text),
        vec!["class A : MonoBehaviour", "{", "}", ""]
    );
}
