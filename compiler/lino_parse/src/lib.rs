//! Lino Parse - statement classifier for single input lines.
//!
//! A line is matched against a fixed, ordered list of shapes; the first
//! shape that matches decides the `Statement`:
//!
//! 1. declaration: `int x = 5;`
//! 2. assignment: `x = 5;`
//! 3. print: `print(x);` / `Console.WriteLine(x);`
//! 4. return: `return x;`
//! 5. lookup: `x` or `x;`
//! 6. anything else is `Statement::Unknown`
//!
//! Classification never consults the variable store. A lookup of an
//! undeclared name is resolved by the executor.

mod cursor;


use cursor::Cursor;
use lino_ir::{is_identifier, PrintForm, Statement, ValueKind};

/// Classify one line of input.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_line(line: &str) -> Statement<'_> {
    let line = line.trim();
    let statement = declaration(line)
        .or_else(|| assignment(line))
        .or_else(|| print(line))
        .or_else(|| return_stmt(line))
        .or_else(|| lookup(line))
        .unwrap_or(Statement::Unknown);
    tracing::debug!(kind = statement.label(), "classified line");
    statement
}

/// The text between the cursor and a final `;`, if non-empty.
fn terminated_body(rest: &str) -> Option<&str> {
    rest.strip_suffix(';').filter(|body| !body.is_empty())
}

/// `<name> = <body>;` with the cursor positioned at `<name>`.
fn binding<'src>(cursor: &mut Cursor<'src>) -> Option<(&'src str, &'src str)> {
    let name = cursor.eat_identifier()?;
    cursor.eat_whitespace();
    if !cursor.eat_char('=') {
        return None;
    }
    let body = terminated_body(cursor.rest())?;
    Some((name, body.trim()))
}

fn declaration(line: &str) -> Option<Statement<'_>> {
    let mut cursor = Cursor::new(line);
    let kind = ValueKind::from_keyword(cursor.eat_identifier()?)?;
    if cursor.eat_whitespace() == 0 {
        return None;
    }
    let (name, literal) = binding(&mut cursor)?;
    Some(Statement::Declaration {
        kind,
        name,
        literal,
    })
}

fn assignment(line: &str) -> Option<Statement<'_>> {
    let (name, literal) = binding(&mut Cursor::new(line))?;
    Some(Statement::Assignment { name, literal })
}

fn print(line: &str) -> Option<Statement<'_>> {
    const FORMS: [(&str, PrintForm); 2] = [
        ("Console.WriteLine(", PrintForm::WriteLine),
        ("print(", PrintForm::Print),
    ];

    FORMS.iter().find_map(|&(prefix, form)| {
        let expr = line.strip_prefix(prefix)?.strip_suffix(");")?;
        (!expr.is_empty()).then_some(Statement::Print { form, expr })
    })
}

fn return_stmt(line: &str) -> Option<Statement<'_>> {
    let mut rest = line.strip_prefix("return")?.chars();
    if !rest.next()?.is_whitespace() {
        return None;
    }
    let expr = terminated_body(rest.as_str())?;
    Some(Statement::Return { expr })
}

fn lookup(line: &str) -> Option<Statement<'_>> {
    let name = line.strip_suffix(';').unwrap_or(line);
    is_identifier(name).then_some(Statement::Lookup { name })
}
