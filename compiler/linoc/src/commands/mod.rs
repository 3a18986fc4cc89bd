//! CLI commands.

mod eval;
mod interactive;
mod run;

pub use eval::eval_line;
pub use interactive::run_interactive;
pub use run::{run_file, run_reader};
