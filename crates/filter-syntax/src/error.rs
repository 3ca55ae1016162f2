use crate::{parser::Rule, semantic::validator::ValidationIssue};
use pest::error::{Error as PestError, ErrorVariant, LineColLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterSyntaxError {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
        source_snippet: String,
    },

    #[error("Invalid number format: {0}")]
    InvalidNumber(String),

    #[error("Invalid date-time literal: {0}")]
    InvalidDateTime(String),

    #[error("Unknown comparison operator: {0}")]
    UnknownComparator(String),

    #[error("Unexpected token: {0}")]
    Unexpected(String),
}

impl FilterSyntaxError {
    /// Positions the failure and restates pest's expected-rule list in
    /// filter vocabulary, e.g. "expected a comparison operator".
    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(pos) | LineColLocation::Span(pos, _) => pos,
        };

        let message = match &err.variant {
            ErrorVariant::ParsingError { positives, .. } => expected(positives),
            ErrorVariant::CustomError { message } => message.clone(),
        };

        FilterSyntaxError::Parse {
            message,
            line,
            column,
            source_snippet: err.line().to_string(),
        }
    }

    /// Multi-line report with the filter text and a caret under the column.
    pub fn format_error(&self) -> String {
        match self {
            FilterSyntaxError::Parse {
                message,
                line,
                column,
                source_snippet,
            } => format!(
                "Invalid filter (line {line}, column {column}): {message}\n    {source_snippet}\n    {}^",
                " ".repeat(column.saturating_sub(1)),
            ),
            _ => self.to_string(),
        }
    }
}

fn expected(rules: &[Rule]) -> String {
    let mut wanted: Vec<&str> = rules.iter().map(|r| describe(*r)).collect();
    wanted.sort_unstable();
    wanted.dedup();
    if wanted.is_empty() {
        "unexpected input".to_string()
    } else {
        format!("expected {}", wanted.join(" or "))
    }
}

fn describe(rule: Rule) -> &'static str {
    match rule {
        Rule::identifier => "a field name",
        Rule::comparator => "a comparison operator (eq, ne, gt, ge, lt, le)",
        Rule::literal
        | Rule::datetime
        | Rule::number
        | Rule::string
        | Rule::boolean
        | Rule::null => "a value",
        Rule::kw_and | Rule::kw_or => "'and' or 'or'",
        Rule::EOI => "end of filter",
        _ => "a condition",
    }
}

/// Raised when a parsed filter does not fit the record schema.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} validation issue(s): {}", issues.len(), summary(issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
