//! Interactive console with line editing and in-memory history.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::DriverConfig;
use crate::errors::DriverError;
use crate::print_handler::SharedPrintHandler;
use crate::repl::Repl;

/// Run the interactive console until `/quit` or end of input.
pub fn run_interactive(
    config: DriverConfig,
    output: SharedPrintHandler,
) -> Result<(), DriverError> {
    output.println(&format!("lino v{}", env!("CARGO_PKG_VERSION")));
    output.println("Type /help for commands, /quit to exit.");

    let mut editor = DefaultEditor::new()?;
    let prompt = config.prompt.clone();
    let mut repl = Repl::new(config, output.clone());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(line.as_str()) {
                        tracing::warn!(%err, "failed to add history entry");
                    }
                }
                if !repl.feed(&line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                output.println("^C");
            }
            Err(ReadlineError::Eof) => {
                output.println("^D");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
