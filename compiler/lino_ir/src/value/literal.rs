//! Literal grammars, one per value kind.

use std::num::IntErrorKind;

use super::ValueKind;
use crate::errors::ParseError;

/// Optional sign followed by ASCII digits, within `i32`.
pub(super) fn parse_int(literal: &str) -> Result<i32, ParseError> {
    let digits = literal
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::invalid(ValueKind::Int, literal));
    }

    literal.parse::<i32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::out_of_range(ValueKind::Int, literal)
        }
        _ => ParseError::invalid(ValueKind::Int, literal),
    })
}

/// Decimal or scientific notation, `.` as the separator.
///
/// Only digits, signs, `.` and `e`/`E` are admitted, so spellings like
/// `inf` or `NaN` never reach the float parser. A finite literal that
/// rounds to infinity is out of range.
pub(super) fn parse_float(literal: &str) -> Result<f32, ParseError> {
    let well_formed = literal.bytes().any(|b| b.is_ascii_digit())
        && literal
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return Err(ParseError::invalid(ValueKind::Float, literal));
    }

    let value = literal
        .parse::<f32>()
        .map_err(|_| ParseError::invalid(ValueKind::Float, literal))?;
    if value.is_infinite() {
        return Err(ParseError::out_of_range(ValueKind::Float, literal));
    }
    Ok(value)
}

/// `"..."`, content taken verbatim with no escape processing.
pub(super) fn parse_string(literal: &str) -> Result<&str, ParseError> {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ParseError::invalid(ValueKind::String, literal))
}

/// Exactly `true` or `false`.
pub(super) fn parse_bool(literal: &str) -> Result<bool, ParseError> {
    match literal {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid(ValueKind::Bool, literal)),
    }
}
