//! Analyzer unit tests.

use super::*;
use crate::frontend::parser;

fn analyze_str(source: &str) -> (Program, Result<AnalysisOutput, Vec<CompileError>>) {
    let mut program = parser::parse_source(source)
        .into_result()
        .unwrap_or_else(|errs| panic!("parse failed: {errs:?}"));
    let result = Analyzer::default().check_program(&mut program);
    (program, result)
}

fn check_str(source: &str) -> Result<(), Vec<CompileError>> {
    analyze_str(source).1.map(|_| ())
}

fn error_messages(source: &str) -> Vec<String> {
    match check_str(source) {
        Ok(()) => Vec::new(),
        Err(errs) => errs.into_iter().map(|e| e.message).collect(),
    }
}

/// Types recorded on every node of `kind` whose label is `label`, in pre-order.
fn annotated(program: &Program, kind: NodeKind, label: &str) -> Vec<Option<DataType>> {
    program
        .outline()
        .into_iter()
        .filter(|e| e.kind == kind && e.label.as_deref() == Some(label))
        .map(|e| e.ty)
        .collect()
}

// ========================================
// Well-formed programs
// ========================================

#[test]
fn test_simple_function() {
    let source = r#"
int add(int a, int b) { return a + b; }
int main() { return add(1, 2); }
"#;
    assert!(check_str(source).is_ok());
}

#[test]
fn test_globals_listed_in_declaration_order() {
    let (_, result) = analyze_str("int counter = 0;\nvoid tick() { counter = counter + 1; }");
    let globals = result.expect("analysis failed").globals;
    let names: Vec<&str> = globals.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["counter", "tick"]);
    assert_eq!(globals[1].to_string(), "function void tick()");
}

#[test]
fn test_user_function_named_like_builtin() {
    let source = "int printf(int x) { return x; } int main() { return printf(1); }";
    let (_, result) = analyze_str(source);
    let globals = result.expect("analysis failed").globals;
    assert_eq!(globals[0].to_string(), "function int printf(int x)");
}

#[test]
fn test_assign_to_builtin_rejected() {
    assert_eq!(
        error_messages("int main() { printf = 1; return 0; }"),
        vec!["left side of assignment must be a variable"]
    );
}

#[test]
fn test_builtin_name_as_local_variable() {
    let source = "int main() { float scanf = 1.5; return scanf > 1; }";
    assert!(check_str(source).is_ok());
}

#[test]
fn test_builtins_accept_any_arguments() {
    let source = r#"
#include <stdio.h>
int main() {
    int n;
    scanf("%d", n);
    printf("%d %f\n", n, 1.5);
    printf("done\n");
    return 0;
}
"#;
    assert!(check_str(source).is_ok());
}

#[test]
fn test_recursion_resolves() {
    let source = "int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); }";
    assert!(check_str(source).is_ok());
}

#[test]
fn test_loops_with_break_and_continue() {
    let source = r#"
int main() {
    int i = 0;
    while (i < 10) {
        i = i + 1;
        if (i == 3) continue;
        if (i == 8) break;
    }
    return i;
}
"#;
    assert!(check_str(source).is_ok());
}

#[test]
fn test_void_function_bare_return() {
    assert!(check_str("void f() { return; }").is_ok());
    assert!(check_str("void f() { }").is_ok());
}

// ========================================
// Scopes
// ========================================

#[test]
fn test_shadowing_is_allowed() {
    let source = "int x; int main() { float x = 1.5; { char x = 'a'; } return 0; }";
    assert!(check_str(source).is_ok());
}

#[test]
fn test_lookup_uses_innermost_declaration() {
    let source = "int main() { int x = 1; { float x = 2.0; x = x + 1; } return x; }";
    let (program, result) = analyze_str(source);
    assert!(result.is_ok());
    assert_eq!(annotated(&program, NodeKind::Assign, "="), vec![Some(DataType::Float)]);
    // `return x` sees the outer int again once the block closes.
    assert_eq!(annotated(&program, NodeKind::Ident, "x").last(), Some(&Some(DataType::Int)));
}

#[test]
fn test_duplicate_in_same_scope() {
    let errs = check_str("int main() { int x; int x; return 0; }").expect_err("expected duplicate");
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].message, "'x' is already declared in this scope");
    assert_eq!(errs[0].notes, vec!["previous declaration at 1:18".to_string()]);
}

#[test]
fn test_duplicate_function_and_parameter() {
    let messages = error_messages("int f(int a, int a) { return a; }\nint f() { return 0; }");
    assert_eq!(
        messages,
        vec![
            "'a' is already declared in this scope".to_string(),
            "'f' is already declared in this scope".to_string(),
        ]
    );
}

#[test]
fn test_parameter_clashes_with_body_local() {
    let messages = error_messages("int f(int a) { int a = 2; return a; }");
    assert_eq!(messages, vec!["'a' is already declared in this scope".to_string()]);
}

#[test]
fn test_block_locals_do_not_leak() {
    let messages = error_messages("int main() { { int y = 1; } return y; }");
    assert_eq!(messages, vec!["undeclared identifier 'y'".to_string()]);
}

#[test]
fn test_later_declarations_are_not_visible() {
    let messages = error_messages("int main() { return helper(); }\nint helper() { return 1; }");
    assert_eq!(messages, vec!["call to undeclared function 'helper'".to_string()]);
}

// ========================================
// Expression types
// ========================================

#[test]
fn test_arithmetic_promotion_and_comparisons() {
    let source = "int main() { float f = 1 + 2.0; int c = 1 == 2; int d = 'a' + 'b'; return 0; }";
    let (program, result) = analyze_str(source);
    assert!(result.is_ok());
    let binaries: Vec<_> = program
        .outline()
        .into_iter()
        .filter(|e| e.kind == NodeKind::Binary)
        .map(|e| (e.label.unwrap_or_default(), e.ty))
        .collect();
    assert_eq!(
        binaries,
        vec![
            ("+".to_string(), Some(DataType::Float)),
            ("==".to_string(), Some(DataType::Int)),
            ("+".to_string(), Some(DataType::Int)),
        ]
    );
}

#[test]
fn test_literal_types() {
    let source = r#"int main() { printf("s", 1, 2.5, 'c', true); return 0; }"#;
    let (program, _) = analyze_str(source);
    let literal_types: Vec<_> = program
        .outline()
        .into_iter()
        .filter(|e| e.kind == NodeKind::Literal)
        .map(|e| e.ty)
        .collect();
    assert_eq!(
        literal_types,
        vec![
            Some(DataType::Char),
            Some(DataType::Int),
            Some(DataType::Float),
            Some(DataType::Char),
            Some(DataType::Int),
            Some(DataType::Int),
        ]
    );
}

#[test]
fn test_not_yields_int_and_negation_keeps_type() {
    let source = "int main() { float f = 2.5; int a = !f; float b = -f; return 0; }";
    let (program, result) = analyze_str(source);
    assert!(result.is_ok());
    assert_eq!(annotated(&program, NodeKind::Unary, "!"), vec![Some(DataType::Int)]);
    assert_eq!(annotated(&program, NodeKind::Unary, "-"), vec![Some(DataType::Float)]);
}

#[test]
fn test_bitwise_not_keeps_operand_type() {
    let source = "int main() { float f = ~2.5; char c = ~'a'; int i = ~1; return 0; }";
    let (program, result) = analyze_str(source);
    assert!(result.is_ok());
    assert_eq!(
        annotated(&program, NodeKind::Unary, "~"),
        vec![Some(DataType::Float), Some(DataType::Char), Some(DataType::Int)]
    );
}

#[test]
fn test_comma_and_ternary_types() {
    let source = "int main() { int a = 1; float r = (a, 2.5); float t = a ? 1 : 2.0; return 0; }";
    let (program, result) = analyze_str(source);
    assert!(result.is_ok());
    assert_eq!(annotated(&program, NodeKind::Binary, ","), vec![Some(DataType::Float)]);
    let ternaries: Vec<_> = program
        .outline()
        .into_iter()
        .filter(|e| e.kind == NodeKind::Ternary)
        .map(|e| e.ty)
        .collect();
    assert_eq!(ternaries, vec![Some(DataType::Float)]);
}

#[test]
fn test_numeric_conversions_are_implicit() {
    let source = "int main() { int i = 2.5; char c = 65; float f = 'a'; i = f; return c; }";
    assert!(check_str(source).is_ok());
}

// ========================================
// Void handling
// ========================================

#[test]
fn test_void_variable_rejected() {
    let messages = error_messages("void x; int main() { void y = 1; return 0; }");
    assert_eq!(
        messages,
        vec!["variable 'x' declared void".to_string(), "variable 'y' declared void".to_string()]
    );
}

#[test]
fn test_void_value_in_initializer() {
    let messages = error_messages("void f() { } int main() { int x = f(); return x; }");
    assert_eq!(messages, vec!["type mismatch: expected 'int', found 'void'".to_string()]);
}

#[test]
fn test_void_condition() {
    let messages = error_messages("void f() { } int main() { while (f()) { } if (f()) { } return 0; }");
    assert_eq!(
        messages,
        vec![
            "condition of 'while' has no value (void)".to_string(),
            "condition of 'if' has no value (void)".to_string(),
        ]
    );
}

#[test]
fn test_undeclared_operand_reported_once() {
    // The void result of `y + 1` must not also trigger a mismatch on the initializer or the return.
    let messages = error_messages("int main() { int x = y + 1; if (y) { } return y; }");
    assert_eq!(messages, vec!["undeclared identifier 'y'".to_string(); 3]);
}

// ========================================
// Statements
// ========================================

#[test]
fn test_break_and_continue_outside_loop() {
    let errs = check_str("int main() {\n  break;\n  continue;\n  return 0;\n}").expect_err("expected errors");
    let got: Vec<_> = errs.iter().map(|e| (e.message.as_str(), e.pos)).collect();
    assert_eq!(
        got,
        vec![
            ("'break' statement not within a loop", Position::new(2, 3)),
            ("'continue' statement not within a loop", Position::new(3, 3)),
        ]
    );
}

#[test]
fn test_loop_depth_restored_after_loop() {
    let messages = error_messages("int main() { while (1) { break; } break; return 0; }");
    assert_eq!(messages, vec!["'break' statement not within a loop".to_string()]);
}

#[test]
fn test_return_mismatch() {
    let messages = error_messages("void f() { return 1; }\nint g() { return; }");
    assert_eq!(
        messages,
        vec![
            "return type mismatch: function returns 'void', found 'int'".to_string(),
            "return type mismatch: function returns 'int', found 'void'".to_string(),
        ]
    );
}

#[test]
fn test_return_annotated_with_value_type() {
    let (program, result) = analyze_str("float half(int n) { return n / 2.0; }");
    assert!(result.is_ok());
    let returns: Vec<_> = program
        .outline()
        .into_iter()
        .filter(|e| e.kind == NodeKind::Return)
        .map(|e| e.ty)
        .collect();
    assert_eq!(returns, vec![Some(DataType::Float)]);
}

// ========================================
// Assignment and calls
// ========================================

#[test]
fn test_const_assignment_rejected() {
    let messages = error_messages("const int limit = 10; int main() { limit = 5; ++limit; return limit; }");
    assert_eq!(messages, vec!["cannot assign to const variable 'limit'".to_string(); 2]);
}

#[test]
fn test_assignment_target_must_be_variable() {
    let messages = error_messages("int f() { return 0; } int main() { int a; (a + 1) = 2; f = 3; return 0; }");
    assert_eq!(messages, vec!["left side of assignment must be a variable".to_string(); 2]);
}

#[test]
fn test_assignment_marks_variable_initialized() {
    let mut program = parser::parse_source("int g; int main() { g = 1; return g; }")
        .into_result()
        .expect("parse failed");
    let mut analyzer = Analyzer::default();
    assert!(analyzer.check_program(&mut program).is_ok());
    let initialized = analyzer.symbols().lookup("g").map(|s| s.kind.clone());
    assert_eq!(
        initialized,
        Some(SymbolKind::Variable(VariableInfo {
            is_const: false,
            is_static: false,
            is_initialized: true,
        }))
    );
}

#[test]
fn test_call_of_non_function() {
    let messages = error_messages("int main() { int x = 1; return x(2); }");
    assert_eq!(messages, vec!["'x' is not a function".to_string()]);
}

#[test]
fn test_call_arguments_are_checked() {
    let messages = error_messages("int f(int a) { return a; } int main() { return f(missing); }");
    assert_eq!(messages, vec!["undeclared identifier 'missing'".to_string()]);
}

#[test]
fn test_call_result_takes_return_type() {
    let (program, result) = analyze_str("char first() { return 'a'; } int main() { return first(); }");
    assert!(result.is_ok());
    assert_eq!(annotated(&program, NodeKind::Call, "first"), vec![Some(DataType::Char)]);
}

// ========================================
// Error budget
// ========================================

#[test]
fn test_error_budget_stops_analysis() {
    let source = "int main() { a; b; c; d; e; return 0; }";
    let mut program = parser::parse_source(source).into_result().expect("parse failed");
    let errs = Analyzer::new(AnalyzerConfig::default().with_max_errors(2))
        .check_program(&mut program)
        .expect_err("expected errors");
    let errors: Vec<_> = errs.iter().filter(|e| e.is_error()).collect();
    assert_eq!(errors.len(), 2);
    assert!(errs.last().is_some_and(|e| !e.is_error()));
}

#[test]
fn test_analyze_free_function() {
    let mut program = parser::parse_source("int main() { return 0; }")
        .into_result()
        .expect("parse failed");
    assert!(analyze(&mut program).is_ok());
    assert_eq!(program.declarations[0].ty, Some(DataType::Int));
}
