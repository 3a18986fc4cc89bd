//! Lino IR - value model and statement tree for the Lino line interpreter.
//!
//! This crate is the leaf of the workspace. It owns:
//! - `Value` / `ValueKind`: the closed set of runtime values and their
//!   literal grammar
//! - `Statement`: the classified shape of one input line
//! - Identifier helpers shared by the classifier and the evaluator

pub mod errors;
mod ident;
mod statement;
pub mod value;

pub use errors::ParseError;
pub use ident::{is_ident_start, is_identifier, is_word_char};
pub use statement::{PrintForm, Statement};
pub use value::{Value, ValueKind};
