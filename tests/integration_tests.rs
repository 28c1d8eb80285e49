//! Integration tests for end-to-end analysis.
//!
//! These tests run the complete pipeline from source text through
//! tokenization, parsing with error recovery, and type checking, and assert
//! on the diagnostics that come out the other end.

use aiscript_analyzer::diagnostics::{Analyzer, Diagnostic, SOURCE_PARSER, SOURCE_TYPING};

fn diagnose(source: &str) -> Vec<Diagnostic> {
    Analyzer::new().diagnose(source)
}

#[test]
fn test_clean_program() {
    let diagnostics = diagnose("let x = 1 + 2\nlet y = x * 3\n<: y");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_annotation_mismatch_reported_once() {
    let diagnostics = diagnose("let x: str = 1");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);

    let d = &diagnostics[0];
    assert_eq!(d.source, SOURCE_TYPING);
    assert!(d.message.contains("str"), "message: {}", d.message);
    assert!(d.message.contains("num"), "message: {}", d.message);
}

#[test]
fn test_if_branches_union_without_error() {
    // The branches disagree, which is a union, not an error.
    let diagnostics = diagnose("let v = if true { 1 } else { \"a\" }");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);

    // Using the union where one member is expected is the error.
    let diagnostics = diagnose("let v = if true { 1 } else { \"a\" }\nlet n: num = v");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert_eq!(diagnostics[0].source, SOURCE_TYPING);
}

#[test]
fn test_untyped_parameter_narrows_on_assignment() {
    // `x` starts not-yet-inferred; the assignment inside the body reveals
    // its type instead of tripping the immutability or assignability check.
    let diagnostics = diagnose("@f(x) {\n\tx = 1\n\treturn x\n}\nf(2)");
    assert!(
        !diagnostics
            .iter()
            .any(|d| d.message.contains("immutable") || d.message.contains("not assignable")),
        "unexpected: {:?}",
        diagnostics
    );
}

#[test]
fn test_immutable_assignment_is_reported() {
    let diagnostics = diagnose("let x = 1\nx = 2");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert_eq!(diagnostics[0].source, SOURCE_TYPING);
    assert!(diagnostics[0].message.contains("immutable"));
}

#[test]
fn test_mutable_assignment_is_checked() {
    assert!(diagnose("var x = 1\nx = 2").is_empty());

    let diagnostics = diagnose("var x = 1\nx = \"a\"");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert_eq!(diagnostics[0].source, SOURCE_TYPING);
}

#[test]
fn test_truncated_block_recovers_with_one_finding() {
    // The document ends mid-block. The parser keeps the partial tree and
    // reports the one missing bracket; the checker still runs over it.
    let diagnostics = diagnose("@f() {\n\tlet x = 1\n");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert_eq!(diagnostics[0].source, SOURCE_PARSER);
    assert!(diagnostics[0].message.contains("}"));
}

#[test]
fn test_undeclared_identifier_degrades_to_any() {
    // `x` on the right-hand side is undeclared, so it types as `any` and
    // the arithmetic goes through without a typing diagnostic.
    let diagnostics = diagnose("let x = y + 1");
    assert!(
        diagnostics.iter().all(|d| d.source != SOURCE_TYPING),
        "unexpected: {:?}",
        diagnostics
    );

    // Even self-reference degrades gracefully.
    let diagnostics = diagnose("let x = x + 1");
    assert!(
        diagnostics.iter().all(|d| d.source != SOURCE_TYPING),
        "unexpected: {:?}",
        diagnostics
    );
}

#[test]
fn test_block_comment_with_asterisk_body_is_ignored() {
    let diagnostics = diagnose("/* note **/\nlet x = 1");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_template_expr_may_contain_braces_in_strings() {
    let diagnostics = diagnose("let s = `v{\"{\"}w`");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);

    let diagnostics = diagnose("let s = `v{\"}\"}w`");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_fatal_error_yields_single_diagnostic() {
    let diagnostics = diagnose("let x = 1 let y = 2");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, SOURCE_PARSER);

    let diagnostics = diagnose("let s = \"unterminated");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, SOURCE_PARSER);
}

#[test]
fn test_forward_reference_through_prepass() {
    // `g` is defined after `f` uses it; the pre-pass makes it visible.
    let diagnostics = diagnose("@f() {\n\treturn g()\n}\n@g() {\n\treturn 1\n}");
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_namespace_members_are_reachable() {
    let source = ":: Foo {\n\tlet bar = 42\n}\nlet x: num = Foo:bar";
    let diagnostics = diagnose(source);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_builtin_argument_checking() {
    let diagnostics = diagnose("Core:add(1, \"a\")");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert_eq!(diagnostics[0].source, SOURCE_TYPING);

    let diagnostics = diagnose("Core:add(1)");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert!(diagnostics[0].message.contains("missing argument"));
}

#[test]
fn test_optional_builtin_arguments() {
    assert!(diagnose("Math:rnd()").is_empty());
    assert!(diagnose("Math:rnd(1, 10)").is_empty());
}

#[test]
fn test_calling_a_non_function() {
    let diagnostics = diagnose("let x = 1\nx()");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert!(diagnostics[0].message.contains("not callable"));
}

#[test]
fn test_each_infers_the_item_type() {
    let source = "each let n, Core:range(1, 5) {\n\tlet m: num = n\n}";
    let diagnostics = diagnose(source);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
}

#[test]
fn test_redeclaration_is_reported() {
    let diagnostics = diagnose("let x = 1\nlet x = 2");
    assert_eq!(diagnostics.len(), 1, "got: {:?}", diagnostics);
    assert!(diagnostics[0].message.contains("already declared"));
}

#[test]
fn test_runs_do_not_leak_state() {
    let analyzer = Analyzer::new();
    assert!(analyzer.diagnose("let x = 1").is_empty());
    assert!(analyzer.diagnose("let x = 1").is_empty());
    assert_eq!(analyzer.diagnose("let x = 1\nlet x = 2").len(), 1);
}

#[test]
fn test_diagnostics_never_panic_on_noise() {
    // Degenerate inputs must produce diagnostics, not crashes.
    for source in ["", "\n\n\n", "let", "@", "{", "[1, 2", "match", "::"] {
        let _ = diagnose(source);
    }
}
