use serde::{Deserialize, Serialize};
use std::fmt;

/// A rendered filter, ready to hand to the query executor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterExpression(String);

impl FilterExpression {
    pub fn new(text: impl Into<String>) -> Self {
        FilterExpression(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilterExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
