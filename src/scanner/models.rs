//! Data models for scan results.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Declared base of a class found around a line. Serializes as the base name, "" when none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseClass {
    /// A class header with no `: Base` clause.
    Unspecified,
    Named(String),
}

impl BaseClass {
    /// The base class name, or "" when none is declared.
    pub fn as_str(&self) -> &str {
        match self {
            BaseClass::Unspecified => "",
            BaseClass::Named(name) => name,
        }
    }

    pub fn is_component(&self) -> bool {
        super::classes::is_component_base(self.as_str())
    }
}

impl Serialize for BaseClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseClass::Unspecified => f.write_str("(no base class)"),
            BaseClass::Named(name) => f.write_str(name),
        }
    }
}

/// Line indices (0-based) of a component class: header, `{` line and matching `}` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentBody {
    pub header: usize,
    pub open: usize,
    pub close: usize,
}

impl ComponentBody {
    /// Exclusive on both ends.
    pub fn contains(&self, line: usize) -> bool {
        line > self.open && line < self.close
    }
}

/// What a scan found in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    /// 1-based line of the component class header.
    pub line: u32,
    pub base: BaseClass,
    pub body: Option<ComponentBody>,
    /// Every `void` method in declaration order.
    pub methods: Vec<String>,
    /// Catalog entries already declared in the file.
    pub implemented: Vec<String>,
    /// Catalog entries not declared anywhere in the file.
    pub missing: Vec<String>,
}
