#![deny(clippy::arithmetic_side_effects)]
//! Lino Eval - variable store, expression evaluator and statement executor.
//!
//! # Architecture
//!
//! - `VariableStore`: flat name -> `Value` map, one per session
//! - `evaluate`: resolves an expression string to a `Value`
//! - `execute`: classifies a line (via `lino_parse`), runs it, renders the result
//! - `Interpreter`: a session owning one store
//!
//! Every failure below `execute` is a typed error (`EvalError`, `ExecError`);
//! `execute` turns them into display text, so its callers only ever see a
//! `String`.

mod environment;
pub mod errors;
mod exec;
mod expr;
mod interpreter;
mod operators;

pub use environment::{AssignError, KindMismatch, VariableStore};
pub use errors::{EvalError, EvalResult, ExecError};
pub use exec::execute;
pub use expr::evaluate;
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, BinaryOp};

// Re-export value types from lino_ir
pub use lino_ir::{Value, ValueKind};
