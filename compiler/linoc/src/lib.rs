//! Lino console driver.
//!
//! Thin adapter between a user and the interpreter: it reads lines, handles
//! `/` meta-commands, forwards everything else to one `Interpreter` session
//! and writes the `> <line>` / result transcript through a print handler.

pub mod commands;
mod config;
mod errors;
mod print_handler;
mod repl;

use std::sync::Once;

pub use config::DriverConfig;
pub use errors::DriverError;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use repl::{transcript_entry, LineOutcome, Repl};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `LINO_LOG=debug` (or
/// `RUST_LOG`); set `LINO_LOG_TREE=1` for indented span trees.
/// Logs go to stderr so they never mix with the transcript.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = ["LINO_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var_os("LINO_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
