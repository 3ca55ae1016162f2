//! Typed filter expressions for the training-event search index: the AST,
//! an OData `$filter` parser, dialect renderers and schema validation.

pub mod ast;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod render;
pub mod semantic;

pub use ast::{Comparator, Condition, FilterExpr, Literal};
pub use dialect::{Dialect, DialectKind, OData, Sql};
pub use error::{FilterSyntaxError, ValidationError};
pub use parser::parse;
pub use render::render;
pub use semantic::{
    referenced_fields,
    validator::{ValidationIssue, validate},
};
