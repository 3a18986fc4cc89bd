//! Expression evaluation.
//!
//! An expression is resolved by trying these rules in order, first match
//! wins:
//!
//! 1. quoted text literal
//! 2. integer literal
//! 3. float literal
//! 4. `true` / `false`
//! 5. declared variable
//! 6. `<int variable> (+|-) <int literal>`, wrapping on overflow
//!
//! The right operand of rule 6 must be a literal; `3 + x` does not evaluate.

use lino_ir::{is_word_char, Value, ValueKind};

use crate::environment::VariableStore;
use crate::errors::{unevaluable, EvalResult};
use crate::operators::{evaluate_binary, BinaryOp};


/// Literal kinds in the order rules 1-4 try them.
const LITERAL_ORDER: [ValueKind; 4] = [
    ValueKind::String,
    ValueKind::Int,
    ValueKind::Float,
    ValueKind::Bool,
];

/// Evaluate `expr` against `store`.
///
/// Surrounding whitespace is ignored. Never mutates the store.
#[tracing::instrument(level = "trace", skip(store))]
pub fn evaluate(expr: &str, store: &VariableStore) -> EvalResult {
    let expr = expr.trim();

    if let Some(value) = LITERAL_ORDER
        .iter()
        .find_map(|&kind| Value::parse(kind, expr).ok())
    {
        tracing::trace!(kind = %value.kind(), "literal");
        return Ok(value);
    }

    if let Some(value) = store.lookup(expr) {
        tracing::trace!("variable");
        return Ok(value);
    }

    if let Some(value) = binary(expr, store) {
        tracing::trace!("binary");
        return Ok(value);
    }

    Err(unevaluable(expr))
}

/// Rule 6. `None` when the shape or the operand types do not fit.
fn binary(expr: &str, store: &VariableStore) -> Option<Value> {
    let (left, rest) = split_word(expr)?;
    let mut rest = rest.trim_start().chars();
    let op = BinaryOp::from_char(rest.next()?)?;
    let right = rest.as_str().trim_start();
    if right.is_empty() || !right.chars().all(is_word_char) {
        return None;
    }

    let Some(&Value::Int(lhs)) = store.get(left) else {
        return None;
    };
    let Ok(Value::Int(rhs)) = Value::parse(ValueKind::Int, right) else {
        return None;
    };

    Some(Value::Int(evaluate_binary(lhs, op, rhs)))
}

/// Split a leading non-empty run of word characters off `s`.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let end = s
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i);
    (end > 0).then(|| s.split_at(end))
}
