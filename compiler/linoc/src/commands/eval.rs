//! `lino -c <line>`: execute a single line.

use crate::config::DriverConfig;
use crate::print_handler::SharedPrintHandler;
use crate::repl::Repl;

/// Execute `line` in a fresh session and write its transcript entry.
pub fn eval_line(line: &str, config: DriverConfig, output: SharedPrintHandler) {
    let mut repl = Repl::new(config, output);
    repl.feed(line);
}
