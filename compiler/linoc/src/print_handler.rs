//! Print handler for transcript output.
//!
//! The driver never writes to stdout directly. Output goes through a
//! handler so the same `Repl` can print to a terminal or collect its
//! transcript in memory:
//! - Native: stdout (default)
//! - Tests and embedding: buffer for assertions
//! - Silent: discard everything

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print without newline, flushing so prompts appear immediately.
    pub fn print(&self, msg: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(msg.as_bytes()).and_then(|()| stdout.flush()) {
            tracing::warn!(%err, "failed to write to stdout");
        }
    }
}

/// Handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create an empty buffer handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append without newline.
    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    /// Everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drop captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        self.print(msg);
        self.print("\n");
    }

    /// Captured output. Empty for stdout and silent.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) | Self::Silent => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Clear captured output. No-op for stdout and silent.
    pub fn clear(&self) {
        match self {
            Self::Stdout(_) | Self::Silent => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
