//! Statement execution.
//!
//! `execute` is the only entry point. It classifies the line, runs the
//! statement, and always returns display text: every error is rendered
//! here, so callers never see a `Result`.
//!
//! Declarations and assignments read their right-hand side as a literal of
//! the target type. They do not go through `evaluate`, so `x = 3 + 2;` is a
//! parse error while `print(x + 2);` evaluates.

use lino_ir::{Statement, Value, ValueKind};
use lino_parse::parse_line;

use crate::environment::{AssignError, VariableStore};
use crate::errors::{cannot_parse, undeclared_variable, EvalResult, ExecError};
use crate::expr::evaluate;

#[cfg(test)]
mod tests;

/// Execute one line against `store` and return the text to display.
///
/// A failed statement leaves `store` unchanged.
#[tracing::instrument(level = "debug", skip(store))]
pub fn execute(line: &str, store: &mut VariableStore) -> String {
    let statement = parse_line(line);
    tracing::debug!(
        kind = statement.label(),
        mutating = statement.is_mutating(),
        "executing"
    );
    match run(statement, store) {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(%err, "statement failed");
            err.to_string()
        }
    }
}

fn run(statement: Statement<'_>, store: &mut VariableStore) -> Result<String, ExecError> {
    match statement {
        Statement::Declaration {
            kind,
            name,
            literal,
        } => declare(kind, name, literal, store),
        Statement::Assignment { name, literal } => assign(name, literal, store),
        Statement::Print { expr, .. } => Ok(report(evaluate(expr, store))),
        Statement::Return { expr } => Ok(format!("Return: {}", report(evaluate(expr, store)))),
        Statement::Lookup { name } => store
            .get(name)
            .map(ToString::to_string)
            .ok_or(ExecError::UnrecognizedStatement),
        Statement::Unknown => Err(ExecError::UnrecognizedStatement),
    }
}

fn declare(
    kind: ValueKind,
    name: &str,
    literal: &str,
    store: &mut VariableStore,
) -> Result<String, ExecError> {
    let value = parse_literal(kind, literal, kind.keyword())?;
    let message = format!("Variable '{name}' declared as {kind} with value {value}");
    store
        .declare(name, value)
        .map_err(|mismatch| ExecError::Redeclared {
            name: name.to_owned(),
            declared: mismatch.declared,
        })?;
    Ok(message)
}

fn assign(name: &str, literal: &str, store: &mut VariableStore) -> Result<String, ExecError> {
    let declared = store
        .kind_of(name)
        .ok_or_else(|| undeclared_variable(name))?;
    let value = parse_literal(declared, literal, declared.runtime_name())?;
    let message = format!("Variable '{name}' updated to {value}");
    store.assign(name, value).map_err(|err| match err {
        AssignError::Undeclared => undeclared_variable(name),
        AssignError::KindMismatch(_) => cannot_parse(literal, declared.runtime_name()),
    })?;
    Ok(message)
}

/// Read `literal` as `kind`, reporting failures under `type_name`.
fn parse_literal(
    kind: ValueKind,
    literal: &str,
    type_name: &'static str,
) -> Result<Value, ExecError> {
    Value::parse(kind, literal).map_err(|err| {
        tracing::debug!(%err, "literal rejected");
        cannot_parse(literal, type_name)
    })
}

/// Evaluator failures are shown as the result text.
fn report(result: EvalResult) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}
