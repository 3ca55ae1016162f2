use crate::error::FilterSyntaxError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Comparison operators of the filter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl Comparator {
    /// OData keyword, e.g. `eq`.
    pub fn keyword(self) -> &'static str {
        match self {
            Comparator::Equal => "eq",
            Comparator::NotEqual => "ne",
            Comparator::GreaterThan => "gt",
            Comparator::GreaterOrEqual => "ge",
            Comparator::LessThan => "lt",
            Comparator::LessOrEqual => "le",
        }
    }

    /// Whether the operator needs an ordering rather than just equality.
    pub fn is_ordering(self) -> bool {
        !matches!(self, Comparator::Equal | Comparator::NotEqual)
    }
}

impl FromStr for Comparator {
    type Err = FilterSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(Comparator::Equal),
            "ne" => Ok(Comparator::NotEqual),
            "gt" => Ok(Comparator::GreaterThan),
            "ge" => Ok(Comparator::GreaterOrEqual),
            "lt" => Ok(Comparator::LessThan),
            "le" => Ok(Comparator::LessOrEqual),
            _ => Err(FilterSyntaxError::UnknownComparator(s.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
