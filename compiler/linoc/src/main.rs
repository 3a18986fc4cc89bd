//! Lino console CLI.
//!
//! Usage:
//!   lino                       # Interactive console
//!   lino repl                  # Interactive console
//!   lino run <file|->          # Execute a script line by line
//!   lino -c <line>             # Execute one line

use std::path::Path;
use std::process::ExitCode;

use linoc::commands::{eval_line, run_file, run_interactive};
use linoc::{init_tracing, stdout_handler, DriverConfig, DriverError};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str);

    let result = match command {
        None | Some("repl") => {
            let Some(config) = parse_flags(DriverConfig::interactive(), args.iter().skip(2)) else {
                return usage_error();
            };
            run_interactive(config, stdout_handler())
        }
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lino run <file|-> [--quiet]");
                return ExitCode::FAILURE;
            };
            let Some(config) = parse_flags(DriverConfig::default(), args.iter().skip(3)) else {
                return usage_error();
            };
            run_file(Path::new(path), config, stdout_handler())
        }
        Some("-c") => {
            let Some(line) = args.get(2) else {
                eprintln!("Usage: lino -c <line> [--echo]");
                return ExitCode::FAILURE;
            };
            let Some(config) = parse_flags(DriverConfig::interactive(), args.iter().skip(3)) else {
                return usage_error();
            };
            eval_line(line, config, stdout_handler());
            Ok(())
        }
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V") => {
            println!("lino {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            return usage_error();
        }
    };

    report(result)
}

/// Fold trailing flags into `config`; `None` if any flag is unknown.
fn parse_flags<'a>(
    mut config: DriverConfig,
    flags: impl Iterator<Item = &'a String>,
) -> Option<DriverConfig> {
    for flag in flags {
        if !config.apply_flag(flag) {
            eprintln!("Unknown option: {flag}");
            return None;
        }
    }
    Some(config)
}

fn report(result: Result<(), DriverError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn usage_error() -> ExitCode {
    eprintln!();
    print_usage();
    ExitCode::FAILURE
}

fn print_usage() {
    println!("Lino line interpreter");
    println!();
    println!("Usage: lino [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl               Interactive console (default)");
    println!("  run <file|->       Execute each line of a file ('-' for stdin)");
    println!("  -c <line>          Execute a single line");
    println!("  --help, -h         Show this help");
    println!("  --version, -V      Show version");
    println!();
    println!("Options:");
    println!("  --quiet, -q        Do not echo '> <line>' before each result");
    println!("  --echo             Echo '> <line>' before each result");
    println!("  --prompt=<text>    Prompt for the interactive console");
    println!();
    println!("Environment:");
    println!("  LINO_LOG           Log filter, e.g. 'debug' or 'lino_eval=trace'");
    println!("  LINO_LOG_TREE      Set to render logs as an indented tree");
}
