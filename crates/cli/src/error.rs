use filter_engine::EvalError;
use filter_syntax::{FilterSyntaxError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to deserialize JSON input: {0}")]
    JsonDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("{}", .0.format_error())]
    Syntax(#[from] FilterSyntaxError),

    #[error("Filter does not match the event schema: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to evaluate filter: {0}")]
    Eval(#[from] EvalError),

    #[error("Configuration error: {0}")]
    Config(String),
}
