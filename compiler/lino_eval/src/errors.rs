//! Evaluation and execution errors.
//!
//! The `Display` text of each variant is exactly what the console shows.
//! Nothing here ever reaches the caller of `execute` as an `Err`: the
//! executor renders every error at a single point.

use lino_ir::{Value, ValueKind};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Failure to evaluate an expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The expression matches none of the evaluation rules.
    #[error("Error: cannot evaluate expression '{expr}'")]
    Unevaluable { expr: String },
}

/// Failure to execute a statement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// The literal does not parse as the target type.
    ///
    /// `type_name` is the declaration keyword for declarations and the
    /// runtime type name of the stored value for assignments.
    #[error("Error: cannot parse value '{text}' as {type_name}")]
    CannotParse {
        text: String,
        type_name: &'static str,
    },
    /// Assignment to a name that was never declared.
    #[error("Error: variable '{name}' not declared")]
    UndeclaredVariable { name: String },
    /// Re-declaration with a different type than the original declaration.
    #[error("Error: variable '{name}' already declared as {declared}")]
    Redeclared { name: String, declared: ValueKind },
    /// No statement shape matched.
    #[error("Error: unsupported or invalid command")]
    UnrecognizedStatement,
}

pub(crate) fn unevaluable(expr: &str) -> EvalError {
    EvalError::Unevaluable {
        expr: expr.to_owned(),
    }
}

pub(crate) fn cannot_parse(text: &str, type_name: &'static str) -> ExecError {
    ExecError::CannotParse {
        text: text.to_owned(),
        type_name,
    }
}

pub(crate) fn undeclared_variable(name: &str) -> ExecError {
    ExecError::UndeclaredVariable {
        name: name.to_owned(),
    }
}
