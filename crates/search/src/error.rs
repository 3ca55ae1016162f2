use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scenario '{key}'; expected one of: {expected}")]
pub struct ScenarioParseError {
    pub key: String,
    pub expected: String,
}
