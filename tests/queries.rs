//! Integration tests for the line queries: enclosing base class, method names, class headers,
//! component body membership.

mod common;
use common::scanner_with;

use ulscan::scanner::{
    enclosing_base_class, find_all_method_names, find_component_class_header,
    find_generic_class_header, find_method_name, is_in_component_body, BaseClass, Scanner,
};

#[test]
fn enclosing_base_class_out_of_bounds_is_invalid() {
    let lines = ["class Foo : MonoBehaviour", "{", "", "}"];
    for line in 4..10 {
        assert_eq!(enclosing_base_class(&lines, line), None);
    }
    let empty: [&str; 0] = [];
    assert_eq!(enclosing_base_class(&empty, 0), None);
}

#[test]
fn enclosing_base_class_named() {
    let lines = ["class Foo : MonoBehaviour", "{", "", "}"];
    let base = enclosing_base_class(&lines, 2).unwrap();
    assert_eq!(base, BaseClass::Named("MonoBehaviour".into()));
    assert_eq!(base.as_str(), "MonoBehaviour");
    assert!(base.is_component());
}

#[test]
fn enclosing_base_class_without_base_is_empty() {
    let lines = ["class Foo", "{", "", "}"];
    let base = enclosing_base_class(&lines, 2).unwrap();
    assert_eq!(base, BaseClass::Unspecified);
    assert_eq!(base.as_str(), "");
}

#[test]
fn enclosing_base_class_from_inside_method_finds_class() {
    let lines = [
        "public class Foo : NetworkBehaviour",
        "{",
        "    void Update()",
        "    {",
        "        ",
        "    }",
        "}",
    ];
    // The nearest opener is the method's `{`; the walk continues upward to the class line.
    assert_eq!(
        enclosing_base_class(&lines, 4),
        Some(BaseClass::Named("NetworkBehaviour".into()))
    );
}

#[test]
fn enclosing_base_class_after_statement_is_invalid() {
    let lines = [
        "class Foo : MonoBehaviour",
        "{",
        "    int x;",
        "    void Update()",
        "    {",
        "        ",
        "    }",
        "}",
    ];
    // Walk reaches depth 1 at the method `{`, then meets `int x;` before any class line.
    assert_eq!(enclosing_base_class(&lines, 5), None);
}

#[test]
fn enclosing_base_class_comment_quote_disqualifies() {
    let lines = ["class Foo : MonoBehaviour", "// it's a component", "{", "", "}"];
    assert_eq!(enclosing_base_class(&lines, 3), None);
}

#[test]
fn enclosing_base_class_at_top_level_is_invalid() {
    let lines = ["using UnityEngine", "", "class Foo", "{", "}"];
    assert_eq!(enclosing_base_class(&lines, 1), None);
}

#[test]
fn enclosing_base_class_opener_without_class_line_is_invalid() {
    // The walk finds the `{` at depth 1, then runs off the top without a class header.
    assert_eq!(enclosing_base_class(&["{", "", "}"], 1), None);
    assert_eq!(enclosing_base_class(&["namespace Game", "{", "", "}"], 2), None);
}

#[test]
fn has_lifecycle_method_uses_catalog() {
    let scanner = scanner_with(&["Update"]);
    assert!(scanner.has_lifecycle_method("void Update()"));
    assert!(!scanner.has_lifecycle_method("void Bananas()"));
}

#[test]
fn builtin_catalog_recognizes_unity_messages() {
    let scanner = Scanner::unity().unwrap();
    assert!(scanner.has_lifecycle_method("    private void OnTriggerEnter2D(Collider2D other)"));
    assert!(scanner.has_lifecycle_method("void Awake() { }"));
    assert!(!scanner.has_lifecycle_method("IEnumerator Start()"));
}

#[test]
fn find_method_name_void_only() {
    assert_eq!(find_method_name("void Foo(int x)"), Some("Foo"));
    assert_eq!(find_method_name("int Foo()"), None);
}

#[test]
fn find_method_name_first_match_only() {
    assert_eq!(find_method_name("void A() { } void B() { }"), Some("A"));
}

#[test]
fn find_all_method_names_ordered() {
    let lines = [
        "class C : MonoBehaviour",
        "{",
        "    void Start() { }",
        "    public float Speed() { return 1f; }",
        "    void Update() { }",
        "    void Start(int x) { }",
        "}",
    ];
    assert_eq!(find_all_method_names(&lines), vec!["Start", "Update", "Start"]);
}

#[test]
fn find_component_class_header_same_line() {
    let lines = ["public class Player : NetworkBehaviour", "{", "}"];
    assert_eq!(find_component_class_header(&lines), Some(0));
}

#[test]
fn find_component_class_header_split_line_is_none() {
    let lines = ["public class Player", "    : MonoBehaviour", "{", "}"];
    assert_eq!(find_component_class_header(&lines), None);
    assert_eq!(find_generic_class_header(&lines), Some(0));
}

#[test]
fn is_in_component_body_exclusive_bounds() {
    let lines = ["class C : MonoBehaviour", "{", "void Update(){}", "int x;", "}"];
    assert!(is_in_component_body(&lines, 2));
    assert!(is_in_component_body(&lines, 3));
    assert!(!is_in_component_body(&lines, 0));
    assert!(!is_in_component_body(&lines, 1));
    assert!(!is_in_component_body(&lines, 4));
}

#[test]
fn is_in_component_body_false_without_component() {
    let lines = ["class C", "{", "int x;", "}"];
    assert!(!is_in_component_body(&lines, 2));
    let unbalanced = ["class C : MonoBehaviour", "{", "int x;"];
    assert!(!is_in_component_body(&unbalanced, 2));
}

#[test]
fn queries_are_idempotent() {
    let scanner = Scanner::unity().unwrap();
    let lines = vec![
        "class C : MonoBehaviour".to_string(),
        "{".to_string(),
        "    void Update() { }".to_string(),
        "".to_string(),
        "}".to_string(),
    ];
    let snapshot = lines.clone();
    for _ in 0..2 {
        assert_eq!(
            scanner.enclosing_base_class(&lines, 3),
            Some(BaseClass::Named("MonoBehaviour".into()))
        );
        assert!(scanner.is_in_component_body(&lines, 3));
        assert!(scanner.is_at_block_top_level(&lines, 1, 3));
        assert_eq!(scanner.find_all_method_names(&lines), vec!["Update"]);
        assert!(scanner.has_lifecycle_method(&lines[2]));
    }
    assert_eq!(lines, snapshot);
}

#[test]
fn scanner_is_shareable_across_threads() {
    let scanner = Scanner::unity().unwrap();
    let lines = ["class C : MonoBehaviour", "{", "    void Update() { }", "}"];
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(scanner.has_lifecycle_method(lines[2]));
                assert!(scanner.is_in_component_body(&lines, 2));
            });
        }
    });
}
