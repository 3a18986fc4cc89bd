//! Runtime values for the Lino interpreter.
//!
//! `Value` is a closed union over four kinds. Each kind has a literal
//! grammar (`Value::parse`) and a canonical display form (`Display`).
//! Nothing here converts between kinds: a literal is read against exactly
//! one `ValueKind` or it fails.
//!
//! # Display vs. literal form
//!
//! `Display` renders text values without quotes, which is what the console
//! shows. `Value::to_literal` renders the form `Value::parse` accepts, so
//! `Value::parse(v.kind(), &v.to_literal())` reproduces `v`.

mod literal;


use std::fmt;

use crate::errors::ParseError;

/// The kind of a runtime value.
///
/// A variable keeps the kind it was declared with for its whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed 32-bit integer.
    Int,
    /// 32-bit IEEE float.
    Float,
    /// Owned text.
    String,
    /// `true` / `false`.
    Bool,
}

impl ValueKind {
    /// All kinds, in declaration-keyword order.
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Bool,
    ];

    /// Look up a kind by its declaration keyword (`int`, `float`, `string`, `bool`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(ValueKind::Int),
            "float" => Some(ValueKind::Float),
            "string" => Some(ValueKind::String),
            "bool" => Some(ValueKind::Bool),
            _ => None,
        }
    }

    /// The declaration keyword for this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
        }
    }

    /// The runtime type name, as reported when an assignment is rejected.
    pub const fn runtime_name(self) -> &'static str {
        match self {
            ValueKind::Int => "Int32",
            ValueKind::Float => "Single",
            ValueKind::String => "String",
            ValueKind::Bool => "Boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Runtime value in the Lino interpreter.
///
/// Values are immutable; updating a variable replaces its `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i32),
    /// Floating-point value.
    Float(f32),
    /// Text value (raw content, no quotes).
    Str(String),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Create a text value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    /// Read `literal` as a value of `kind`.
    ///
    /// The literal is taken as-is; callers trim surrounding whitespace.
    pub fn parse(kind: ValueKind, literal: &str) -> Result<Value, ParseError> {
        match kind {
            ValueKind::Int => literal::parse_int(literal).map(Value::Int),
            ValueKind::Float => literal::parse_float(literal).map(Value::Float),
            ValueKind::String => literal::parse_string(literal).map(Value::string),
            ValueKind::Bool => literal::parse_bool(literal).map(Value::Bool),
        }
    }

    /// Render this value in the form `Value::parse` accepts.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Str(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
