//! CLI entrypoint for unity-lifecycle-scan.

use clap::{CommandFactory, Parser};
use ulscan::cli::{init_logging, run, Args};

fn main() {
    // No args at all: show help
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        std::process::exit(0);
    }

    let args = Args::parse();
    init_logging(args.verbose);
    std::process::exit(run(args));
}
