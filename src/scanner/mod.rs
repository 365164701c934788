//! Scan C# sources for Unity component classes and their lifecycle methods.

mod braces;
mod catalog;
mod classes;
mod constants;
mod files;
mod lifecycle;
pub mod methods;
mod models;
mod scan;
pub mod util;

pub use braces::{
    find_enclosing_opener, find_matching_closing_brace, find_opening_brace,
    is_at_block_top_level, BraceDepth,
};
pub use catalog::{LifecycleCatalog, LifecycleMessage};
pub use classes::{
    enclosing_base_class, find_component_class_header, find_generic_class_header,
    header_base_class, is_component_base, is_in_component_body, locate_component_body,
    COMPONENT_BASES,
};
pub use files::{is_cs_file, iter_cs_files, normalize_exclude_dir, DEFAULT_EXCLUDE_DIRS};
pub use lifecycle::Scanner;
pub use methods::{find_all_method_names, find_method_name};
pub use models::{BaseClass, ComponentBody, FileReport};
pub use scan::{read_source, scan_path, scan_source};
