//! The scanner: a lifecycle catalog plus the pattern compiled from it.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use super::braces;
use super::catalog::{LifecycleCatalog, LifecycleMessage};
use super::classes;
use super::methods::{self, lifecycle_pattern};
use super::models::{BaseClass, ComponentBody};
use crate::error::Result;

/// Heuristic, line-oriented scanner for Unity component classes.
///
/// All queries take the file as a slice of lines and 0-based indices into it. Queries never
/// mutate the scanner, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: LifecycleCatalog,
    lifecycle_re: Regex,
}

impl Scanner {
    /// Compile the lifecycle alternation once for the lifetime of the scanner.
    pub fn new(catalog: LifecycleCatalog) -> Result<Self> {
        let pattern = lifecycle_pattern(catalog.names());
        let lifecycle_re = Regex::new(&pattern)?;
        debug!(entries = catalog.len(), "compiled lifecycle pattern");
        Ok(Self {
            catalog,
            lifecycle_re,
        })
    }

    /// Scanner over the built-in Unity catalog.
    pub fn unity() -> Result<Self> {
        Self::new(LifecycleCatalog::builtin())
    }

    pub fn catalog(&self) -> &LifecycleCatalog {
        &self.catalog
    }

    /// True if the line declares `void <name>(...)` with `<name>` a catalog entry.
    pub fn has_lifecycle_method(&self, line: &str) -> bool {
        self.lifecycle_re.is_match(line)
    }

    pub fn enclosing_base_class<S: AsRef<str>>(
        &self,
        lines: &[S],
        line: usize,
    ) -> Option<BaseClass> {
        classes::enclosing_base_class(lines, line)
    }

    pub fn find_method_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        methods::find_method_name(line)
    }

    pub fn find_all_method_names<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<&'a str> {
        methods::find_all_method_names(lines)
    }

    pub fn find_component_class_header<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        classes::find_component_class_header(lines)
    }

    pub fn find_generic_class_header<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        classes::find_generic_class_header(lines)
    }

    pub fn find_opening_brace<S: AsRef<str>>(&self, lines: &[S], from: usize) -> Option<usize> {
        braces::find_opening_brace(lines, from)
    }

    pub fn find_matching_closing_brace<S: AsRef<str>>(
        &self,
        lines: &[S],
        open: usize,
    ) -> Option<usize> {
        braces::find_matching_closing_brace(lines, open)
    }

    pub fn locate_component_body<S: AsRef<str>>(&self, lines: &[S]) -> Option<ComponentBody> {
        classes::locate_component_body(lines)
    }

    pub fn is_in_component_body<S: AsRef<str>>(&self, lines: &[S], line: usize) -> bool {
        classes::is_in_component_body(lines, line)
    }

    pub fn is_at_block_top_level<S: AsRef<str>>(
        &self,
        lines: &[S],
        open: usize,
        target: usize,
    ) -> bool {
        braces::is_at_block_top_level(lines, open, target)
    }

    /// Catalog names of every lifecycle declaration on the line, in order.
    pub fn find_lifecycle_methods<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.lifecycle_re
            .captures_iter(line)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    fn declared_lifecycle_names<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> HashSet<&'a str> {
        let mut declared = HashSet::new();
        for line in lines {
            let line: &str = line.as_ref();
            if self.has_lifecycle_method(line) {
                declared.extend(self.find_lifecycle_methods(line));
            }
        }
        declared
    }

    /// Catalog entries declared as lifecycle methods anywhere in the file, in catalog order.
    pub fn implemented_lifecycle_methods<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> Vec<&LifecycleMessage> {
        let declared = self.declared_lifecycle_names(lines);
        self.catalog
            .messages()
            .iter()
            .filter(|m| declared.contains(m.name.as_str()))
            .collect()
    }

    /// Catalog entries not yet declared in the file, offered only when `line` is a direct
    /// member line of the component class body. None when no suggestion applies there.
    pub fn suggest_lifecycle_methods<S: AsRef<str>>(
        &self,
        lines: &[S],
        line: usize,
    ) -> Option<Vec<&LifecycleMessage>> {
        let body = classes::locate_component_body(lines)?;
        if !body.contains(line) || !braces::is_at_block_top_level(lines, body.open, line) {
            return None;
        }
        let declared = self.declared_lifecycle_names(lines);
        Some(
            self.catalog
                .messages()
                .iter()
                .filter(|m| !declared.contains(m.name.as_str()))
                .collect(),
        )
    }
}
