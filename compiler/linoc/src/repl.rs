//! Console session: meta-commands, transcript formatting, output.
//!
//! A `Repl` wraps one `Interpreter`. Lines starting with `/` are handled
//! here and never reach the interpreter; every other non-empty line is
//! executed and written to the print handler as a transcript entry.

use lino_eval::Interpreter;

use crate::config::DriverConfig;
use crate::print_handler::SharedPrintHandler;


const HELP_TEXT: &str = "\
Statements:
  int x = 5;                Declare (int, float, string, bool)
  x = 6;                    Assign a literal of the declared type
  print(x + 1);             Print an expression
  Console.WriteLine(x);     Same as print
  return x;                 Print with a 'Return:' prefix
  x                         Show a variable

Commands:
  /vars                     List variables
  /reset                    Start a new, empty session
  /help                     Show this help
  /quit                     Exit";

/// What one input line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line: nothing to show.
    Skip,
    /// Text to write, including its trailing newline.
    Output(String),
    /// The user asked to leave.
    Exit,
}

/// Format one executed line for the transcript.
pub fn transcript_entry(line: &str, result: &str, echo: bool) -> String {
    if echo {
        format!("> {line}\n{result}\n")
    } else {
        format!("{result}\n")
    }
}

/// One console session.
pub struct Repl {
    interpreter: Interpreter,
    config: DriverConfig,
    output: SharedPrintHandler,
}

impl Repl {
    /// Create a console with a fresh session.
    pub fn new(config: DriverConfig, output: SharedPrintHandler) -> Self {
        Repl {
            interpreter: Interpreter::new(),
            config,
            output,
        }
    }

    /// The current interpreter session.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Process one line without writing anything.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineOutcome::Skip;
        }
        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }

        let result = self.interpreter.execute(trimmed);
        LineOutcome::Output(transcript_entry(trimmed, &result, self.config.echo))
    }

    /// Process one line and write its output. Returns `false` once the user
    /// asked to exit.
    pub fn feed(&mut self, line: &str) -> bool {
        match self.process_line(line) {
            LineOutcome::Skip => true,
            LineOutcome::Output(text) => {
                self.output.print(&text);
                true
            }
            LineOutcome::Exit => false,
        }
    }

    fn handle_meta_command(&mut self, cmd: &str) -> LineOutcome {
        let command = cmd.split_whitespace().next().unwrap_or(cmd);
        tracing::debug!(command, "meta command");

        let text = match command {
            "/quit" | "/q" | "/exit" => return LineOutcome::Exit,
            "/help" | "/h" | "/?" => HELP_TEXT.to_owned(),
            "/reset" => {
                self.interpreter = Interpreter::new();
                "Session reset (variables cleared)".to_owned()
            }
            "/vars" => self.list_variables(),
            _ => format!("Unknown command: {command}\nType /help for available commands."),
        };
        LineOutcome::Output(format!("{text}\n"))
    }

    fn list_variables(&self) -> String {
        let vars = self.interpreter.variables();
        if vars.is_empty() {
            return "(no variables declared)".to_owned();
        }
        let lines: Vec<String> = vars
            .iter()
            .map(|(name, value)| format!("  {} {name} = {}", value.kind(), value.to_literal()))
            .collect();
        format!("Variables:\n{}", lines.join("\n"))
    }
}
