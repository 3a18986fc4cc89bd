use super::*;
use pretty_assertions::assert_eq;

/// Run each line in order against a fresh store, returning every result.
fn run_lines(lines: &[&str]) -> (Vec<String>, VariableStore) {
    let mut store = VariableStore::new();
    let outputs = lines.iter().map(|line| execute(line, &mut store)).collect();
    (outputs, store)
}

fn last_output(lines: &[&str]) -> String {
    let (outputs, _) = run_lines(lines);
    outputs.last().cloned().unwrap_or_default()
}

// Declarations

#[test]
fn declare_int_then_print() {
    let (outputs, store) = run_lines(&["int x = 5;", "print(x);"]);
    assert_eq!(
        outputs,
        vec!["Variable 'x' declared as int with value 5", "5"]
    );
    assert_eq!(store.get("x"), Some(&Value::Int(5)));
}

#[test]
fn declare_every_kind() {
    let (outputs, store) = run_lines(&[
        "float f = 1.25;",
        "string s = \"hello world\";",
        "bool b = false;",
    ]);
    assert_eq!(
        outputs,
        vec![
            "Variable 'f' declared as float with value 1.25",
            "Variable 's' declared as string with value hello world",
            "Variable 'b' declared as bool with value false",
        ]
    );
    assert_eq!(store.kind_of("f"), Some(ValueKind::Float));
    assert_eq!(store.kind_of("s"), Some(ValueKind::String));
    assert_eq!(store.kind_of("b"), Some(ValueKind::Bool));
}

#[test]
fn declaration_renders_canonical_value() {
    assert_eq!(
        last_output(&["int x = +007;"]),
        "Variable 'x' declared as int with value 7"
    );
    assert_eq!(
        last_output(&["float f = 2.0;"]),
        "Variable 'f' declared as float with value 2"
    );
}

#[test]
fn declaration_with_bad_literal_does_not_mutate() {
    let (outputs, store) = run_lines(&["int x = abc;"]);
    assert_eq!(outputs, vec!["Error: cannot parse value 'abc' as int"]);
    assert!(store.is_empty());
}

#[test]
fn declaration_does_not_evaluate_expressions() {
    let (outputs, store) = run_lines(&["int x = 5;", "int y = x;", "int z = x + 1;"]);
    assert_eq!(outputs[1], "Error: cannot parse value 'x' as int");
    assert_eq!(outputs[2], "Error: cannot parse value 'x + 1' as int");
    assert_eq!(store.len(), 1);
}

#[test]
fn declaration_out_of_range() {
    assert_eq!(
        last_output(&["int x = 2147483648;"]),
        "Error: cannot parse value '2147483648' as int"
    );
}

#[test]
fn string_declaration_requires_quotes() {
    assert_eq!(
        last_output(&["string s = \"unterminated;"]),
        "Error: cannot parse value '\"unterminated' as string"
    );
    assert_eq!(
        last_output(&["string s = bare;"]),
        "Error: cannot parse value 'bare' as string"
    );
}

#[test]
fn redeclaration_with_same_type_overwrites() {
    let (outputs, store) = run_lines(&["int x = 1;", "int x = 2;", "x"]);
    assert_eq!(outputs[1], "Variable 'x' declared as int with value 2");
    assert_eq!(outputs[2], "2");
    assert_eq!(store.get("x"), Some(&Value::Int(2)));
}

#[test]
fn redeclaration_with_other_type_is_rejected() {
    let (outputs, store) = run_lines(&["int x = 1;", "string x = \"one\";"]);
    assert_eq!(outputs[1], "Error: variable 'x' already declared as int");
    assert_eq!(store.get("x"), Some(&Value::Int(1)));
}

// Assignments

#[test]
fn assignment_updates_declared_variable() {
    let (outputs, store) = run_lines(&["int x = 5;", "x = 10;", "print(x);"]);
    assert_eq!(outputs[1], "Variable 'x' updated to 10");
    assert_eq!(outputs[2], "10");
    assert_eq!(store.get("x"), Some(&Value::Int(10)));
}

#[test]
fn assignment_of_every_kind() {
    let (outputs, _) = run_lines(&[
        "float f = 1.5;",
        "f = -2.5;",
        "string s = \"a\";",
        "s = \"b c\";",
        "bool b = true;",
        "b = false;",
    ]);
    assert_eq!(outputs[1], "Variable 'f' updated to -2.5");
    assert_eq!(outputs[3], "Variable 's' updated to b c");
    assert_eq!(outputs[5], "Variable 'b' updated to false");
}

#[test]
fn assignment_to_undeclared_variable() {
    let (outputs, store) = run_lines(&["x = 10;"]);
    assert_eq!(outputs, vec!["Error: variable 'x' not declared"]);
    assert!(store.is_empty());
}

#[test]
fn assignment_uses_literal_parsing_not_evaluation() {
    let (outputs, store) = run_lines(&["int x = 5;", "x = 3 + 2;", "print(x);"]);
    assert_eq!(outputs[1], "Error: cannot parse value '3 + 2' as Int32");
    assert_eq!(outputs[2], "5");
    assert_eq!(store.get("x"), Some(&Value::Int(5)));
}

#[test]
fn assignment_type_mismatch_names_original_type() {
    let (outputs, store) = run_lines(&[
        "int i = 1;",
        "i = \"text\";",
        "float f = 1.5;",
        "f = true;",
        "string s = \"s\";",
        "s = 3;",
        "bool b = true;",
        "b = 1;",
    ]);
    assert_eq!(outputs[1], "Error: cannot parse value '\"text\"' as Int32");
    assert_eq!(outputs[3], "Error: cannot parse value 'true' as Single");
    assert_eq!(outputs[5], "Error: cannot parse value '3' as String");
    assert_eq!(outputs[7], "Error: cannot parse value '1' as Boolean");
    assert_eq!(store.get("i"), Some(&Value::Int(1)));
    assert_eq!(store.get("f"), Some(&Value::Float(1.5)));
    assert_eq!(store.get("s"), Some(&Value::string("s")));
    assert_eq!(store.get("b"), Some(&Value::Bool(true)));
}

#[test]
fn int_literal_assigned_to_float_variable() {
    let (outputs, store) = run_lines(&["float f = 1.5;", "f = 3;"]);
    assert_eq!(outputs[1], "Variable 'f' updated to 3");
    assert_eq!(store.get("f"), Some(&Value::Float(3.0)));
}

// Print and return

#[test]
fn print_evaluates_arithmetic() {
    assert_eq!(last_output(&["int x = 5;", "print(x + 3);"]), "8");
    assert_eq!(last_output(&["int x = 5;", "print(x - 8);"]), "-3");
}

#[test]
fn print_with_variable_on_right_reports_evaluator_error() {
    assert_eq!(
        last_output(&["int x = 5;", "print(3 + x);"]),
        "Error: cannot evaluate expression '3 + x'"
    );
}

#[test]
fn print_literals() {
    assert_eq!(last_output(&["print(\"hi\");"]), "hi");
    assert_eq!(last_output(&["print(1.5);"]), "1.5");
    assert_eq!(last_output(&["print(true);"]), "true");
    assert_eq!(last_output(&["print( 42 );"]), "42");
}

#[test]
fn console_write_line_matches_print() {
    let (outputs, _) = run_lines(&[
        "string s = \"same\";",
        "print(s);",
        "Console.WriteLine(s);",
    ]);
    assert_eq!(outputs[1], outputs[2]);
    assert_eq!(outputs[2], "same");
}

#[test]
fn print_undeclared_reports_evaluator_error() {
    assert_eq!(
        last_output(&["print(nope);"]),
        "Error: cannot evaluate expression 'nope'"
    );
}

#[test]
fn return_prefixes_result() {
    assert_eq!(last_output(&["int x = 5;", "return x;"]), "Return: 5");
    assert_eq!(last_output(&["return \"done\";"]), "Return: done");
    assert_eq!(
        last_output(&["return x;"]),
        "Return: Error: cannot evaluate expression 'x'"
    );
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(
        last_output(&["int m = 2147483647;", "print(m + 1);"]),
        "-2147483648"
    );
    assert_eq!(
        last_output(&["int m = -2147483648;", "return m - 1;"]),
        "Return: 2147483647"
    );
}

// Lookup and fallback

#[test]
fn bare_identifier_shows_value() {
    let (outputs, _) = run_lines(&["string s = \"v\";", "s", "s;"]);
    assert_eq!(outputs[1], "v");
    assert_eq!(outputs[2], "v");
}

#[test]
fn bare_undeclared_identifier_is_unsupported() {
    assert_eq!(
        last_output(&["ghost;"]),
        "Error: unsupported or invalid command"
    );
}

#[test]
fn unsupported_command_is_idempotent() {
    let (outputs, store) = run_lines(&["foo();", "foo();", "foo();"]);
    for output in &outputs {
        assert_eq!(output, "Error: unsupported or invalid command");
    }
    assert!(store.is_empty());
}

#[test]
fn read_only_lines_do_not_mutate() {
    let (_, before) = run_lines(&["int x = 5;"]);
    let (_, after) = run_lines(&["int x = 5;", "print(x + 1);", "return x;", "x", "foo();"]);
    assert_eq!(before.len(), after.len());
    assert_eq!(before.get("x"), after.get("x"));
}

// === Property tests ===

mod proptest_exec {
    use super::super::execute;
    use crate::environment::VariableStore;
    use lino_ir::{Value, ValueKind};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn declared_ints_render_canonically(name in "[a-z][a-z0-9_]{0,6}", n in any::<i32>()) {
            let mut store = VariableStore::new();
            let output = execute(&format!("int {name} = {n};"), &mut store);
            prop_assert_eq!(output, format!("Variable '{name}' declared as int with value {n}"));
            prop_assert_eq!(store.get(&name), Some(&Value::Int(n)));
        }

        #[test]
        fn assignments_never_change_kind(n in any::<i32>(), literal in "[a-z0-9\". ]{1,8}") {
            let mut store = VariableStore::new();
            execute(&format!("int x = {n};"), &mut store);
            execute(&format!("x = {literal};"), &mut store);
            prop_assert_eq!(store.kind_of("x"), Some(ValueKind::Int));
        }

        #[test]
        fn any_unquoted_line_returns_text(line in "[a-z0-9=;() +.-]{0,24}") {
            let mut store = VariableStore::new();
            prop_assert!(!execute(&line, &mut store).is_empty());
        }
    }
}
