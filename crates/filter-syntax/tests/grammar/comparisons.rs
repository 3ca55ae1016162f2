//! Grammar tests for single comparisons and literals

use filter_syntax::parser::{FilterParser, Rule};
use pest::Parser;

#[test]
fn test_parse_literals() {
    let inputs = vec![
        "Status eq 1",
        "RegisteredAttendeesCount gt -1",
        "Name eq 'Safety induction'",
        "Name eq 'It''s here'",
        "Name eq ''",
        "IsRegistrationClosed eq false",
        "TeamId ne null",
        "StartDate ge 2024-03-15T00:00:00.0000000Z",
        "EndDate lt 2024-03-15T10:00:00+02:00",
        "StartDate lt 2024-03-15T00:00:00Z",
    ];

    for input in inputs {
        let result = FilterParser::parse(Rule::filter, input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_parse_every_comparator() {
    for op in ["eq", "ne", "gt", "ge", "lt", "le", "EQ", "Ge"] {
        let input = format!("Status {op} 1");
        let result = FilterParser::parse(Rule::filter, &input);
        assert!(result.is_ok(), "Failed to parse: {}", input);
    }
}

#[test]
fn test_reject_malformed_comparisons() {
    let inputs = vec![
        "",
        "Status",
        "Status eq",
        "Status == 1",
        "eq 1",
        "Status eq 'unterminated",
        "Status eq 1 Status eq 2",
        "StartDate ge 2024-03-15",
        "and eq 1",
    ];

    for input in inputs {
        let result = FilterParser::parse(Rule::filter, input);
        assert!(result.is_err(), "Should have failed: {}", input);
    }
}

#[test]
fn test_identifier_may_start_with_keyword() {
    let input = "notes eq 'x' and order eq 1 and nullable eq null";
    let result = FilterParser::parse(Rule::filter, input);
    assert!(result.is_ok());
}
