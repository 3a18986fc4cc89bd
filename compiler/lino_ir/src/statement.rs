//! Classified input lines.

use crate::value::ValueKind;

/// Which surface syntax a print statement used.
///
/// Both forms evaluate and report identically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrintForm {
    /// `print(<expr>);`
    Print,
    /// `Console.WriteLine(<expr>);`
    WriteLine,
}

/// One classified line, borrowing its pieces from the source line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Statement<'src> {
    /// `<type> <name> = <literal>;`
    Declaration {
        kind: ValueKind,
        name: &'src str,
        literal: &'src str,
    },
    /// `<name> = <literal>;`
    Assignment { name: &'src str, literal: &'src str },
    /// `print(<expr>);` or `Console.WriteLine(<expr>);`
    Print { form: PrintForm, expr: &'src str },
    /// `return <expr>;`
    Return { expr: &'src str },
    /// A bare identifier, optionally followed by one `;`.
    ///
    /// Whether the name is declared is only known at execution time.
    Lookup { name: &'src str },
    /// Nothing matched.
    Unknown,
}

impl Statement<'_> {
    /// Short label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Statement::Declaration { .. } => "declaration",
            Statement::Assignment { .. } => "assignment",
            Statement::Print { .. } => "print",
            Statement::Return { .. } => "return",
            Statement::Lookup { .. } => "lookup",
            Statement::Unknown => "unknown",
        }
    }

    /// Whether executing this statement can change the variable store.
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Statement::Declaration { .. } | Statement::Assignment { .. }
        )
    }
}
