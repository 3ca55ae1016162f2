use crate::{
    ast::{
        expr::{Condition, FilterExpr},
        literal::Literal,
        operator::Comparator,
    },
    error::FilterSyntaxError,
};
use chrono::{DateTime, Utc};
use pest::{
    Parser,
    iterators::{Pair, Pairs},
};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/odata_filter.pest"]
pub struct FilterParser;

pub type BuildResult<T> = Result<T, FilterSyntaxError>;

/// Parse filter text into a typed expression tree.
pub fn parse(input: &str) -> BuildResult<FilterExpr> {
    let mut pairs =
        FilterParser::parse(Rule::filter, input).map_err(FilterSyntaxError::from_pest_error)?;

    let filter = pairs
        .next()
        .ok_or_else(|| FilterSyntaxError::Unexpected("empty input".to_string()))?;

    let or_expr = filter
        .into_inner()
        .find(|p| p.as_rule() == Rule::or_expr)
        .ok_or_else(|| FilterSyntaxError::Unexpected("missing expression".to_string()))?;

    build_or(or_expr)
}

/// Operand pairs of a binary chain, with the keyword pairs dropped.
fn operands(pairs: Pairs<Rule>) -> impl Iterator<Item = Pair<Rule>> {
    pairs.filter(|p| !matches!(p.as_rule(), Rule::kw_and | Rule::kw_or | Rule::kw_not))
}

fn build_or(pair: Pair<Rule>) -> BuildResult<FilterExpr> {
    let mut children = operands(pair.into_inner())
        .map(build_and)
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(match children.len() {
        1 => children.remove(0),
        _ => FilterExpr::Or(children),
    })
}

fn build_and(pair: Pair<Rule>) -> BuildResult<FilterExpr> {
    let mut children = operands(pair.into_inner())
        .map(build_unary)
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(match children.len() {
        1 => children.remove(0),
        _ => FilterExpr::And(children),
    })
}

fn build_unary(pair: Pair<Rule>) -> BuildResult<FilterExpr> {
    let mut inner = pair.into_inner();
    let first = inner
        .next()
        .ok_or_else(|| FilterSyntaxError::Unexpected("empty operand".to_string()))?;

    match first.as_rule() {
        Rule::kw_not => {
            let operand = inner
                .next()
                .ok_or_else(|| FilterSyntaxError::Unexpected("'not' without operand".into()))?;
            Ok(FilterExpr::not(build_unary(operand)?))
        }
        Rule::primary => build_primary(first),
        other => Err(FilterSyntaxError::Unexpected(format!("{other:?}"))),
    }
}

fn build_primary(pair: Pair<Rule>) -> BuildResult<FilterExpr> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| FilterSyntaxError::Unexpected("empty primary".to_string()))?;

    match inner.as_rule() {
        Rule::or_expr => build_or(inner),
        Rule::comparison => build_comparison(inner).map(FilterExpr::Leaf),
        Rule::bool_const => Ok(FilterExpr::Const(
            inner.as_str().eq_ignore_ascii_case("true"),
        )),
        other => Err(FilterSyntaxError::Unexpected(format!("{other:?}"))),
    }
}

fn build_comparison(pair: Pair<Rule>) -> BuildResult<Condition> {
    let mut inner = pair.into_inner();
    let mut next = |what: &str| {
        inner
            .next()
            .ok_or_else(|| FilterSyntaxError::Unexpected(format!("comparison without {what}")))
    };

    let field = next("field")?.as_str().to_string();
    let op = next("operator")?.as_str().parse::<Comparator>()?;
    let value = build_literal(next("value")?)?;

    Ok(Condition { field, op, value })
}

fn build_literal(pair: Pair<Rule>) -> BuildResult<Literal> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| FilterSyntaxError::Unexpected("empty literal".to_string()))?;
    let text = inner.as_str();

    match inner.as_rule() {
        Rule::number => text
            .parse::<i64>()
            .map(Literal::Int)
            .map_err(|_| FilterSyntaxError::InvalidNumber(text.to_string())),
        Rule::datetime => DateTime::parse_from_rfc3339(text)
            .map(|dt| Literal::DateTime(dt.with_timezone(&Utc)))
            .map_err(|e| FilterSyntaxError::InvalidDateTime(format!("{text}: {e}"))),
        Rule::string => {
            let raw = inner
                .into_inner()
                .next()
                .map(|p| p.as_str())
                .unwrap_or_default();
            Ok(Literal::String(raw.replace("''", "'")))
        }
        Rule::boolean => Ok(Literal::Boolean(text.eq_ignore_ascii_case("true"))),
        Rule::null => Ok(Literal::Null),
        other => Err(FilterSyntaxError::Unexpected(format!("{other:?}"))),
    }
}
