use crate::ast::{literal::Literal, operator::Comparator};
use model::schema::EventField;
use serde::{Deserialize, Serialize};

/// A boolean filter expression over record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterExpr {
    /// A single `Field op literal` comparison
    Leaf(Condition),

    /// Every child must hold. An empty list is `true`.
    And(Vec<FilterExpr>),

    /// At least one child must hold. An empty list is `false`.
    Or(Vec<FilterExpr>),

    Not(Box<FilterExpr>),

    /// The bare `true` / `false` constants.
    Const(bool),
}

/// A single field comparison, e.g. `Status eq 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub op: Comparator,
    pub value: Literal,
}

impl Condition {
    pub fn new(field: impl Into<String>, op: Comparator, value: impl Into<Literal>) -> Self {
        Condition {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Builds a condition against a known event field.
    pub fn on(field: EventField, op: Comparator, value: impl Into<Literal>) -> Self {
        Condition::new(field.name(), op, value)
    }
}

impl FilterExpr {
    pub fn leaf(cond: Condition) -> Self {
        FilterExpr::Leaf(cond)
    }

    pub fn and(exprs: Vec<FilterExpr>) -> Self {
        FilterExpr::And(exprs)
    }

    pub fn or(exprs: Vec<FilterExpr>) -> Self {
        FilterExpr::Or(exprs)
    }

    pub fn not(expr: FilterExpr) -> Self {
        FilterExpr::Not(Box::new(expr))
    }

    /// Joins `exprs` with `and`, flattening nested conjunctions and
    /// collapsing a single operand to itself.
    pub fn conjunction(exprs: impl IntoIterator<Item = FilterExpr>) -> Self {
        let mut flat = Vec::new();
        for expr in exprs {
            match expr {
                FilterExpr::And(children) => flat.extend(children),
                other => flat.push(other),
            }
        }

        match flat.len() {
            1 => flat.remove(0),
            _ => FilterExpr::And(flat),
        }
    }

    /// All leaf conditions, depth first.
    pub fn conditions(&self) -> Vec<&Condition> {
        match self {
            FilterExpr::Leaf(cond) => vec![cond],
            FilterExpr::And(children) | FilterExpr::Or(children) => {
                children.iter().flat_map(FilterExpr::conditions).collect()
            }
            FilterExpr::Not(inner) => inner.conditions(),
            FilterExpr::Const(_) => Vec::new(),
        }
    }

    /// Deduplicated, sorted list of every field referenced in this filter.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self
            .conditions()
            .into_iter()
            .map(|cond| cond.field.clone())
            .collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }
}
