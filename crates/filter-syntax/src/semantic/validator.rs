use crate::{
    ast::{
        expr::{Condition, FilterExpr},
        literal::Literal,
        operator::Comparator,
    },
    error::ValidationError,
};
use model::{core::data_type::DataType, schema::RecordSchema};
use std::fmt;
use tracing::debug;

/// Type of semantic validation issue
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    UnknownField {
        field: String,
        suggestion: Option<&'static str>,
    },
    TypeMismatch {
        field: String,
        expected: DataType,
        found: DataType,
    },
    UnorderedComparison {
        field: String,
        op: Comparator,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnknownField {
                field,
                suggestion: Some(s),
            } => write!(f, "unknown field '{field}' (did you mean '{s}'?)"),
            ValidationIssue::UnknownField { field, .. } => write!(f, "unknown field '{field}'"),
            ValidationIssue::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "field '{field}' expects {expected} but found {found}"),
            ValidationIssue::UnorderedComparison { field, op } => {
                write!(f, "field '{field}' cannot be compared with '{op}'")
            }
        }
    }
}

/// Checks every condition of a filter against a record schema.
pub struct SchemaValidator<'a> {
    schema: &'a dyn RecordSchema,
    issues: Vec<ValidationIssue>,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a dyn RecordSchema) -> Self {
        SchemaValidator {
            schema,
            issues: Vec::new(),
        }
    }

    pub fn validate(mut self, expr: &FilterExpr) -> Vec<ValidationIssue> {
        for cond in expr.conditions() {
            self.check_condition(cond);
        }
        debug!(issues = self.issues.len(), "Validated filter expression");
        self.issues
    }

    fn check_condition(&mut self, cond: &Condition) {
        let Some(field_type) = self.schema.field_type(&cond.field) else {
            let suggestion = self
                .schema
                .field_names()
                .into_iter()
                .find(|name| name.eq_ignore_ascii_case(&cond.field));
            self.issues.push(ValidationIssue::UnknownField {
                field: cond.field.clone(),
                suggestion,
            });
            return;
        };

        let found = cond.value.data_type();
        if !field_type.accepts(found) {
            self.issues.push(ValidationIssue::TypeMismatch {
                field: cond.field.clone(),
                expected: field_type,
                found,
            });
            return;
        }

        if cond.op.is_ordering() && (!field_type.is_ordered() || cond.value == Literal::Null) {
            self.issues.push(ValidationIssue::UnorderedComparison {
                field: cond.field.clone(),
                op: cond.op,
            });
        }
    }
}

/// Validates `expr` against `schema`, failing with every issue found.
pub fn validate(expr: &FilterExpr, schema: &dyn RecordSchema) -> Result<(), ValidationError> {
    let issues = SchemaValidator::new(schema).validate(expr);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}
