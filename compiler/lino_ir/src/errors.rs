//! Literal parsing errors.

use crate::value::ValueKind;

/// Failure to read a literal as a value of a given kind.
///
/// Always recoverable. Callers turn it into a diagnostic line and leave the
/// variable store untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not match the grammar of the target kind.
    #[error("'{literal}' is not a valid {kind} literal")]
    InvalidLiteral { kind: ValueKind, literal: String },
    /// The text is well-formed but does not fit the target representation.
    #[error("'{literal}' is out of range for {kind}")]
    ValueOutOfRange { kind: ValueKind, literal: String },
}

impl ParseError {
    pub(crate) fn invalid(kind: ValueKind, literal: &str) -> Self {
        ParseError::InvalidLiteral {
            kind,
            literal: literal.to_owned(),
        }
    }

    pub(crate) fn out_of_range(kind: ValueKind, literal: &str) -> Self {
        ParseError::ValueOutOfRange {
            kind,
            literal: literal.to_owned(),
        }
    }

    /// The kind the literal was parsed against.
    pub fn kind(&self) -> ValueKind {
        match self {
            ParseError::InvalidLiteral { kind, .. } | ParseError::ValueOutOfRange { kind, .. } => {
                *kind
            }
        }
    }

    /// The literal text that failed to parse.
    pub fn literal(&self) -> &str {
        match self {
            ParseError::InvalidLiteral { literal, .. }
            | ParseError::ValueOutOfRange { literal, .. } => literal,
        }
    }
}
