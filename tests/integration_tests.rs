//! Integration tests for the minic front end

use std::fs;
use std::path::{Path, PathBuf};

use minic::diagnostics::ErrorKind;
use minic::pipeline::{self, FrontendConfig, FrontendOutput};

fn fixture_files(dir: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(dir);
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .map(|entry| entry.expect("bad directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "c"))
        .collect();
    files.sort();
    files
}

fn run_fixture(name: &str) -> FrontendOutput {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    let source = fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    pipeline::run(&source, &FrontendConfig::default())
}

fn messages(output: &FrontendOutput) -> Vec<String> {
    output.diagnostics.iter().map(|d| d.to_string()).collect()
}

/// Test that all valid fixtures pass both phases
#[test]
fn test_valid_fixtures() {
    let files = fixture_files("valid");
    assert!(!files.is_empty());
    for path in files {
        let source = fs::read_to_string(&path).expect("read fixture");
        let output = pipeline::run(&source, &FrontendConfig::default());
        assert!(
            !output.has_errors(),
            "Expected {} to pass, got: {:#?}",
            path.display(),
            messages(&output)
        );
        assert!(output.analyzed);
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let files = fixture_files("invalid");
    assert!(!files.is_empty());
    for path in files {
        let source = fs::read_to_string(&path).expect("read fixture");
        let output = pipeline::run(&source, &FrontendConfig::default());
        assert!(output.has_errors(), "Expected {} to fail", path.display());
    }
}

#[test]
fn test_undeclared_fixture() {
    let output = run_fixture("invalid/undeclared.c");
    assert_eq!(
        messages(&output),
        vec!["semantic error at 2:12: undeclared identifier 'missing'".to_string()]
    );
}

#[test]
fn test_missing_semicolon_recovers() {
    let output = run_fixture("invalid/missing_semicolon.c");
    assert!(!output.analyzed);
    assert_eq!(
        messages(&output),
        vec!["syntax error at 3:5: expected ';' after variable declaration, found 'int'".to_string()]
    );
    // The declaration after the error is still in the tree.
    let outline = output.program.to_string();
    assert!(outline.contains("VarDecl int y"), "{outline}");
    assert!(!outline.contains("VarDecl int x"), "{outline}");
}

#[test]
fn test_break_outside_loop_fixture() {
    let output = run_fixture("invalid/break_outside_loop.c");
    assert_eq!(
        messages(&output),
        vec!["semantic error at 5:5: 'break' statement not within a loop".to_string()]
    );
}

#[test]
fn test_void_variable_fixture() {
    let output = run_fixture("invalid/void_variable.c");
    assert_eq!(
        messages(&output),
        vec![
            "semantic error at 5:10: variable 'v' declared void".to_string(),
            "semantic error at 6:13: type mismatch: expected 'int', found 'void'".to_string(),
        ]
    );
}

#[test]
fn test_unsupported_fixture() {
    let output = run_fixture("invalid/unsupported.c");
    assert_eq!(output.error_count(), 1, "{:#?}", messages(&output));
    let first = output.diagnostics.first().expect("expected diagnostics");
    assert_eq!(first.kind, ErrorKind::Syntax);
    assert_eq!(first.message, "'struct' is not supported");
    // `int main` after the struct still parses.
    assert!(output.program.to_string().contains("FunctionDecl int main"));
}

#[test]
fn test_return_mismatch_fixture() {
    let output = run_fixture("invalid/return_mismatch.c");
    assert_eq!(
        messages(&output),
        vec![
            "semantic error at 3:12: return type mismatch: function returns 'void', found 'int'".to_string(),
            "semantic error at 7:5: return type mismatch: function returns 'int', found 'void'".to_string(),
        ]
    );
}

#[test]
fn test_independent_syntax_errors_in_one_run() {
    let source = "int main() {\n    int a = ;\n    float b = 1.0\n    return a;\n}\n";
    let output = pipeline::run(source, &FrontendConfig::default());
    insta::assert_snapshot!(messages(&output).join("\n"), @r"
    syntax error at 2:13: expected expression, found ';'
    syntax error at 4:5: expected ';' after variable declaration, found 'return'
    ");
}

#[test]
fn test_semantic_errors_accumulate() {
    let source = "\
int f(int a, int a) { return a; }
int main() {
    const int k = 1;
    k = 2;
    undefined_fn(1);
    continue;
    return k(3);
}
";
    let output = pipeline::run(source, &FrontendConfig::default());
    insta::assert_snapshot!(messages(&output).join("\n"), @r"
    semantic error at 1:18: 'a' is already declared in this scope
    semantic error at 4:5: cannot assign to const variable 'k'
    semantic error at 5:5: call to undeclared function 'undefined_fn'
    semantic error at 6:5: 'continue' statement not within a loop
    semantic error at 7:12: 'k' is not a function
    ");
}

#[test]
fn test_max_errors_budget() {
    let source = "int main() { a; b; c; d; return 0; }";
    let output = pipeline::run(source, &FrontendConfig::new().with_max_errors(2));
    assert_eq!(output.error_count(), 2);
    assert_eq!(output.warning_count(), 1);
    let last = output.diagnostics.last().expect("expected diagnostics");
    assert_eq!(last.kind, ErrorKind::Warning);
    assert_eq!(last.message, "too many errors (2), stopping");
}

#[test]
fn test_symbols_after_analysis() {
    let output = run_fixture("valid/scopes.c");
    let dump: Vec<String> = output.symbols.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        dump,
        vec![
            "variable static const float PI",
            "variable int counter",
            "function float area(float r)",
            "function void bump()",
            "function int main()",
        ]
    );
}

#[test]
fn test_annotated_tree_dump() {
    let output = pipeline::run("int main() { float x = 1 + 2.5; return 0; }", &FrontendConfig::default());
    insta::assert_snapshot!(output.program.to_string(), @r"
    Program
      FunctionDecl int main : int
        Compound
          VarDecl float x : float
            Binary + : float
              Literal 1 : int
              Literal 2.5 : float
          Return : int
            Literal 0 : int
    ");
}
