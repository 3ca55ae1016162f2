pub mod validator;

use crate::ast::expr::FilterExpr;

/// Every field name the filter mentions, sorted and deduplicated.
pub fn referenced_fields(expr: &FilterExpr) -> Vec<String> {
    expr.fields()
}
