//! Grammar tests for and/or/not and grouping

use filter_syntax::{
    Comparator, Condition, FilterExpr, FilterSyntaxError,
    parser::{FilterParser, Rule, parse},
};
use pest::Parser;

#[test]
fn test_parse_logical_operators() {
    let inputs = vec![
        "Status eq 1 and RegisteredAttendeesCount gt 0",
        "Status eq 1 or Status eq 3",
        "not Status eq 0",
        "not (Status eq 0 or Status eq 2)",
        "(Status eq 1) and (Audience eq 0)",
        "((Status eq 1))",
        "true",
        "false and Status eq 1",
        "Status eq 1 AND Audience eq 1 Or not(IsRegistrationClosed eq true)",
    ];

    for input in inputs {
        let result = FilterParser::parse(Rule::filter, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_reject_dangling_operators() {
    for input in ["Status eq 1 and", "or Status eq 1", "not", "(Status eq 1", "Status eq 1)"] {
        let result = FilterParser::parse(Rule::filter, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse("(Status eq 1 or Status eq 3) and Audience eq 0").unwrap();
    match expr {
        FilterExpr::And(children) => {
            assert_eq!(children.len(), 2);
            assert!(matches!(children[0], FilterExpr::Or(_)));
        }
        other => panic!("expected And, got {other:?}"),
    }
}

#[test]
fn test_not_wraps_operand() {
    let expr = parse("not Status eq 0").unwrap();
    assert_eq!(
        expr,
        FilterExpr::not(FilterExpr::leaf(Condition::new(
            "Status",
            Comparator::Equal,
            0
        )))
    );
}

#[test]
fn test_constant_filter() {
    assert_eq!(parse("true").unwrap(), FilterExpr::Const(true));
    assert_eq!(parse("FALSE").unwrap(), FilterExpr::Const(false));
}

#[test]
fn test_format_error_points_at_column() {
    let err = parse("Status eq 1 and").unwrap_err();
    assert!(matches!(err, FilterSyntaxError::Parse { .. }));
    let formatted = err.format_error();
    let lines: Vec<&str> = formatted.lines().collect();
    assert!(lines[0].starts_with("Invalid filter (line 1, column 16): expected "));
    assert_eq!(lines[1], "    Status eq 1 and");
    assert_eq!(lines[2], format!("    {}^", " ".repeat(15)));
}

#[test]
fn test_missing_operator_is_described() {
    let err = parse("Status").unwrap_err();
    match err {
        FilterSyntaxError::Parse { message, column, .. } => {
            assert_eq!(column, 7);
            assert!(message.contains("comparison operator"), "{message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
