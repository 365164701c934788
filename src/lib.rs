//! Find Unity component classes and their engine lifecycle methods in C# sources.

pub mod cli;
pub mod error;
pub mod scanner;

pub use cli::{display_path, run, Args};
pub use error::{Error, Result};
pub use scanner::{
    enclosing_base_class, find_component_class_header, is_in_component_body, scan_path,
    BaseClass, FileReport, LifecycleCatalog, LifecycleMessage, Scanner,
};
