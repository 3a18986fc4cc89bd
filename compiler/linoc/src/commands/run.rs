//! `lino run <file>`: execute a script line by line.
//!
//! Each line is one console entry, exactly as if it had been typed. A
//! `/quit` line stops the run early.

use std::io::BufRead;
use std::path::Path;

use crate::config::DriverConfig;
use crate::errors::DriverError;
use crate::print_handler::SharedPrintHandler;
use crate::repl::Repl;

/// Execute every line of the file at `path`. `-` reads standard input.
pub fn run_file(
    path: &Path,
    config: DriverConfig,
    output: SharedPrintHandler,
) -> Result<(), DriverError> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return run_reader(stdin.lock(), config, output);
    }

    let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lines = source.lines().count(), "running script");
    run_reader(source.as_bytes(), config, output)
}

/// Execute every line read from `reader`.
pub fn run_reader(
    reader: impl BufRead,
    config: DriverConfig,
    output: SharedPrintHandler,
) -> Result<(), DriverError> {
    let mut repl = Repl::new(config, output);
    for line in reader.lines() {
        let line = line.map_err(DriverError::Read)?;
        if !repl.feed(&line) {
            break;
        }
    }
    Ok(())
}
