//! Interpreter session.
//!
//! An `Interpreter` owns exactly one `VariableStore`. Creating one starts an
//! empty session; dropping it discards every variable.

use lino_ir::Value;

use crate::environment::VariableStore;
use crate::exec::execute;


/// One interpreter session.
#[derive(Debug, Default)]
pub struct Interpreter {
    store: VariableStore,
}

impl Interpreter {
    /// Start a session with no variables.
    pub fn new() -> Self {
        Interpreter {
            store: VariableStore::new(),
        }
    }

    /// Execute one line and return the text to display.
    pub fn execute(&mut self, line: &str) -> String {
        execute(line, &mut self.store)
    }

    /// Read-only access to the session's variables.
    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// All variables, sorted by name.
    pub fn variables(&self) -> Vec<(&str, &Value)> {
        let mut vars: Vec<_> = self.store.iter().collect();
        vars.sort_unstable_by_key(|&(name, _)| name);
        vars
    }
}
