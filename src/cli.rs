//! CLI: args, logging setup, path display, and run logic.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::scanner::{
    read_source, scan_path, util::source_lines, BaseClass, FileReport, LifecycleCatalog, Scanner,
};

#[derive(Parser)]
#[command(name = "unity-lifecycle-scan")]
#[command(about = "Find Unity component classes and their lifecycle methods in C# sources.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// C# file or directory to scan (default when omitted: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// 1-based line in PATH (a file) to inspect: enclosing base class and lifecycle suggestions
    #[arg(short, long, value_name = "N")]
    pub line: Option<usize>,

    /// JSON file with [{"name": ..., "description": ...}] records replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory name (or **/name) to exclude from scan; can be repeated (default: Library, Temp, obj)
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// No output; exit with code 1 if no component class was found
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging on stderr: -v = info, -vv = debug, -vvv = trace (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Install the stderr tracing subscriber. Safe to call more than once.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Format path for user-facing output: strip Windows extended path prefix `\\?\` so it displays as a normal path.
pub fn display_path(path: &Path) -> std::borrow::Cow<'_, str> {
    let s = path.to_string_lossy();
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return std::borrow::Cow::Owned(stripped.to_string());
        }
    }
    s
}

fn resolve_root(path: Option<&PathBuf>) -> Result<PathBuf, i32> {
    let path = path.cloned().unwrap_or_else(|| PathBuf::from("."));
    let root = path.canonicalize().unwrap_or(path);
    if !root.exists() {
        eprintln!("Error: no such file or directory: {}", display_path(&root));
        return Err(2);
    }
    Ok(root)
}

fn build_scanner(catalog: Option<&PathBuf>) -> Result<Scanner, i32> {
    let catalog = match catalog {
        Some(path) => LifecycleCatalog::from_path(path).map_err(|err| {
            eprintln!("Error: {err}");
            2
        })?,
        None => LifecycleCatalog::builtin(),
    };
    Scanner::new(catalog).map_err(|err| {
        eprintln!("Error: {err}");
        2
    })
}

fn run_line_query(file: &Path, line: usize, scanner: &Scanner, quiet: bool) -> i32 {
    if !file.is_file() {
        eprintln!("Error: --line needs a file, got: {}", display_path(file));
        return 2;
    }
    let Some(index) = line.checked_sub(1) else {
        eprintln!("Error: --line is 1-based");
        return 2;
    };
    let text = match read_source(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {err}");
            return 2;
        }
    };
    let lines = source_lines(&text);
    let base = scanner.enclosing_base_class(&lines, index);
    let suggestions = scanner.suggest_lifecycle_methods(&lines, index);
    if quiet {
        return if base.as_ref().is_some_and(BaseClass::is_component) {
            0
        } else {
            1
        };
    }
    println!("{}:{}", display_path(file), line);
    match &base {
        Some(base) => println!("  Enclosing class base: {}", base),
        None => println!("  Enclosing class base: (no class context)"),
    }
    println!(
        "  In component body: {}",
        if scanner.is_in_component_body(&lines, index) {
            "yes"
        } else {
            "no"
        }
    );
    match suggestions {
        Some(list) if !list.is_empty() => {
            println!("  Suggested lifecycle methods:");
            for m in list {
                if m.description.is_empty() {
                    println!("    void {}()", m.name);
                } else {
                    println!("    void {}()  // {}", m.name, m.description);
                }
            }
        }
        Some(_) => println!("  All lifecycle methods are implemented."),
        None => println!("  No lifecycle suggestions at this line."),
    }
    0
}

fn print_reports(root: &Path, reports: &[FileReport]) {
    if reports.is_empty() {
        println!("No component classes found.");
        return;
    }
    for r in reports {
        let rel = r.file.strip_prefix(root).unwrap_or(&r.file);
        let rel = if rel.as_os_str().is_empty() { &r.file } else { rel };
        println!("{}:{}: {}", display_path(rel), r.line, r.base);
        if r.implemented.is_empty() {
            println!("  lifecycle: (none)");
        } else {
            println!("  lifecycle: {}", r.implemented.join(", "));
        }
        let others: Vec<_> = r
            .methods
            .iter()
            .filter(|m| !r.implemented.contains(m))
            .map(String::as_str)
            .collect();
        if !others.is_empty() {
            println!("  other methods: {}", others.join(", "));
        }
    }
}

pub fn run(args: Args) -> i32 {
    let root = match resolve_root(args.path.as_ref()) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let scanner = match build_scanner(args.catalog.as_ref()) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if let Some(line) = args.line {
        return run_line_query(&root, line, &scanner, args.quiet);
    }

    let exclude_dirs = (!args.exclude_dirs.is_empty()).then_some(args.exclude_dirs.as_slice());
    let reports = scan_path(&root, exclude_dirs, &scanner);
    info!(root = %display_path(&root), components = reports.len(), "scan complete");

    if args.quiet {
        return if reports.is_empty() { 1 } else { 0 };
    }
    if args.json {
        return match serde_json::to_string_pretty(&reports) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(err) => {
                eprintln!("Error: {err}");
                2
            }
        };
    }
    print_reports(&root, &reports);
    0
}
