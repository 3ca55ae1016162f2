use model::core::data_type::DataType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Field '{0}' is not present on the record")]
    FieldNotFound(String),

    #[error("Cannot compare field '{field}' of type {actual} with a {literal} literal")]
    TypeMismatch {
        field: String,
        actual: DataType,
        literal: DataType,
    },
}
