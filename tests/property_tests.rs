//! Property-based tests for the minic front end
//!
//! These tests use proptest to verify invariants across many randomly generated inputs, catching edge cases that
//! hand-written tests might miss.

use minic::ast::{NodeKind, OutlineEntry, Program};
use minic::format::format_source;
use minic::parser;
use minic::pipeline::{self, FrontendConfig};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn leaf_expr() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 0u32..100).prop_map(|(i, f)| format!("{i}.{f}")),
        "[a-z]".prop_map(|c| format!("'{c}'")),
    ]
}

/// Expressions over `int a` and `float b` that always have a numeric type.
fn expr() -> impl Strategy<Value = String> {
    leaf_expr().prop_recursive(4, 32, 3, |inner| {
        let op = prop_oneof![
            Just("+"),
            Just("-"),
            Just("*"),
            Just("/"),
            Just("<"),
            Just(">="),
            Just("=="),
            Just("!="),
            Just("&&"),
            Just("||"),
        ];
        prop_oneof![
            (inner.clone(), op, inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-({e})")),
            inner.clone().prop_map(|e| format!("!{e}")),
            inner.clone().prop_map(|e| format!("f({e})")),
            (inner.clone(), inner.clone(), inner).prop_map(|(c, t, e)| format!("({c} ? {t} : {e})")),
        ]
    })
}

/// A single top-level declaration with a unique name.
fn declaration(index: usize) -> impl Strategy<Value = String> {
    prop_oneof![
        expr().prop_map(move |e| format!("int g{index} = {};", e.replace('a', "1").replace('b', "2.0"))),
        expr().prop_map(move |e| format!("float h{index}(int a, float b) {{ float r = {e}; return r; }}")),
        expr().prop_map(move |e| {
            format!("int w{index}(int a, float b) {{ while (a > 0) {{ a = a - 1; if ({e}) break; }} return a; }}")
        }),
    ]
}

fn program() -> impl Strategy<Value = (usize, String)> {
    (0usize..8).prop_flat_map(|n| {
        let decls: Vec<_> = (0..n).map(declaration).collect();
        decls.prop_map(move |decls| (n, format!("int f(int a) {{ return a; }}\n{}", decls.join("\n"))))
    })
}

fn literal_and_kind_outline(program: &Program) -> Vec<(NodeKind, Option<String>)> {
    program
        .outline()
        .into_iter()
        .map(|OutlineEntry { kind, label, .. }| (kind, label))
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: a program of N well-formed declarations parses into exactly N top-level nodes and analyzes clean.
    #[test]
    fn well_formed_declarations_are_all_kept((n, source) in program()) {
        let output = pipeline::run(&source, &FrontendConfig::default());
        prop_assert!(!output.has_errors(), "{source}\n{:#?}", output.diagnostics);
        prop_assert_eq!(output.program.declarations.len(), n + 1);
    }

    /// Property: printing then re-parsing yields the same node kinds, labels and literal values.
    #[test]
    fn format_round_trips((_, source) in program()) {
        let original = parser::parse_source(&source).into_result().expect("parse original");
        let formatted = format_source(&source).expect("format");
        let reparsed = parser::parse_source(&formatted).into_result().expect("parse formatted");
        prop_assert_eq!(literal_and_kind_outline(&original), literal_and_kind_outline(&reparsed));
        prop_assert_eq!(original.node_count(), reparsed.node_count());
    }

    /// Property: formatting is idempotent.
    #[test]
    fn format_is_idempotent((_, source) in program()) {
        let once = format_source(&source).expect("first format");
        let twice = format_source(&once).expect("second format");
        prop_assert_eq!(once, twice);
    }

    /// Property: arbitrary input never panics or hangs, and each phase respects its error budget.
    #[test]
    fn arbitrary_input_terminates(source in "\\PC{0,200}", max_errors in 1usize..10) {
        let output = pipeline::run(&source, &FrontendConfig::new().with_max_errors(max_errors));
        prop_assert!(output.error_count() <= max_errors);
    }

    /// Property: C-flavoured token soup gets the same guarantees as arbitrary text.
    #[test]
    fn token_soup_terminates(
        tokens in prop::collection::vec(
            prop_oneof![
                Just("int"), Just("float"), Just("void"), Just("if"), Just("else"), Just("while"),
                Just("return"), Just("break"), Just("struct"), Just("x"), Just("1"), Just("2.5"),
                Just("("), Just(")"), Just("{"), Just("}"), Just(";"), Just(","), Just("="),
                Just("+"), Just("*"), Just("?"), Just(":"), Just("#"), Just("&"), Just("\"s\""),
            ],
            0..80,
        )
    ) {
        let source = tokens.join(" ");
        let output = pipeline::run(&source, &FrontendConfig::default());
        prop_assert!(output.error_count() <= minic::diagnostics::DEFAULT_MAX_ERRORS);
    }
}
