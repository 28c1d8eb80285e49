use super::{Analyzer, Severity, SOURCE_PARSER, SOURCE_TYPING};

#[test]
fn clean_source_yields_no_diagnostics() {
    let analyzer = Analyzer::new();
    assert!(analyzer.diagnose("let x = 1 + 2").is_empty());
}

#[test]
fn positions_are_zero_based_points() {
    let analyzer = Analyzer::new();
    let diagnostics = analyzer.diagnose("let x: str = 1");
    assert_eq!(diagnostics.len(), 1);

    let d = &diagnostics[0];
    assert_eq!(d.severity, Severity::Error);
    assert_eq!(d.source, SOURCE_TYPING);
    // Loc 1:1 becomes protocol 0:0, zero width.
    assert_eq!(d.range.start.line, 0);
    assert_eq!(d.range.start.character, 0);
    assert_eq!(d.range.start, d.range.end);
}

#[test]
fn syntax_findings_carry_the_parser_source() {
    let analyzer = Analyzer::new();
    let diagnostics = analyzer.diagnose("let x =");
    assert!(!diagnostics.is_empty());
    assert!(diagnostics.iter().all(|d| d.source == SOURCE_PARSER));
}

#[test]
fn fatal_errors_collapse_to_one_diagnostic() {
    let analyzer = Analyzer::new();
    let diagnostics = analyzer.diagnose("let x = 1 let y = 2");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].source, SOURCE_PARSER);
}

#[test]
fn runs_are_independent() {
    let analyzer = Analyzer::new();
    assert!(analyzer.diagnose("let x = 1").is_empty());
    // The same definition again must not be "already declared".
    assert!(analyzer.diagnose("let x = 1").is_empty());
}
