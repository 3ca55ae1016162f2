use crate::{comparator, error::EvalError};
use filter_syntax::{Condition, FilterExpr};
use model::schema::FieldSource;
use tracing::warn;

/// In-process evaluation of a filter against one record.
pub trait Evaluate {
    fn matches(&self, source: &dyn FieldSource) -> Result<bool, EvalError>;
}

impl Evaluate for FilterExpr {
    fn matches(&self, source: &dyn FieldSource) -> Result<bool, EvalError> {
        match self {
            FilterExpr::Leaf(cond) => cond.matches(source),
            FilterExpr::And(children) => {
                for child in children {
                    if !child.matches(source)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            FilterExpr::Or(children) => {
                for child in children {
                    if child.matches(source)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            FilterExpr::Not(inner) => Ok(!inner.matches(source)?),
            FilterExpr::Const(value) => Ok(*value),
        }
    }
}

impl Evaluate for Condition {
    fn matches(&self, source: &dyn FieldSource) -> Result<bool, EvalError> {
        let actual = source
            .field_value(&self.field)
            .ok_or_else(|| EvalError::FieldNotFound(self.field.clone()))?;
        let target = self.value.to_value();

        let (actual_type, literal_type) = (actual.data_type(), target.data_type());
        if !actual_type.accepts(literal_type) {
            warn!(
                field = %self.field,
                "Unsupported comparison between {} and {}", actual_type, literal_type
            );
            return Err(EvalError::TypeMismatch {
                field: self.field.clone(),
                actual: actual_type,
                literal: literal_type,
            });
        }

        Ok(comparator::test(self.op, &actual, &target))
    }
}

/// A record-side filter: holds an optional expression tree.
#[derive(Clone, Debug, Default)]
pub struct RecordFilter {
    expr: Option<FilterExpr>,
}

impl RecordFilter {
    /// Create a new empty filter that accepts every record.
    pub fn new() -> Self {
        RecordFilter { expr: None }
    }

    pub fn with_expr(expr: FilterExpr) -> Self {
        RecordFilter { expr: Some(expr) }
    }

    pub fn expr(&self) -> Option<&FilterExpr> {
        self.expr.as_ref()
    }

    /// Returns true if the record passes the filter (or if there's no filter).
    pub fn eval(&self, source: &dyn FieldSource) -> Result<bool, EvalError> {
        match &self.expr {
            Some(expr) => expr.matches(source),
            None => Ok(true),
        }
    }

    /// Keeps the records that pass, in input order.
    pub fn select<'r, R: FieldSource>(&self, records: &'r [R]) -> Result<Vec<&'r R>, EvalError> {
        let mut selected = Vec::new();
        for record in records {
            if self.eval(record)? {
                selected.push(record);
            }
        }
        Ok(selected)
    }
}
