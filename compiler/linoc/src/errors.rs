//! Driver errors.
//!
//! Only I/O around the interpreter can fail here. Interpreter diagnostics
//! are ordinary output and never become a `DriverError`.

use std::path::PathBuf;

use rustyline::error::ReadlineError;

/// Failure in the console driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// A script file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line could not be read from the script input.
    #[error("cannot read input: {0}")]
    Read(#[source] std::io::Error),
    /// The interactive line editor failed.
    #[error("line editor failed: {0}")]
    Editor(#[from] ReadlineError),
}
