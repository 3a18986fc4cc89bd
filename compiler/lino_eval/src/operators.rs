//! Binary operator evaluation.
//!
//! Only integer `+` and `-` exist. Arithmetic wraps at the `i32` bounds.

/// A binary arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
}

impl BinaryOp {
    /// Recognize an operator character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            _ => None,
        }
    }
}

/// Apply `op` to two integers.
#[inline]
pub fn evaluate_binary(left: i32, op: BinaryOp, right: i32) -> i32 {
    match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Sub => left.wrapping_sub(right),
    }
}
