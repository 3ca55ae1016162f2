use serde::{Deserialize, Serialize};
use std::fmt;

/// Field types understood by the event search index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Boolean,
    String,
    Timestamp,
    Null,
}

impl DataType {
    /// Whether a literal of type `other` may be compared against a field of
    /// this type. `Null` is comparable with everything.
    pub fn accepts(&self, other: DataType) -> bool {
        *self == other || other == DataType::Null || *self == DataType::Null
    }

    /// Only these types have a meaningful `gt`/`lt` ordering.
    pub fn is_ordered(&self) -> bool {
        matches!(self, DataType::Int | DataType::String | DataType::Timestamp)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "Edm.Int32",
            DataType::Boolean => "Edm.Boolean",
            DataType::String => "Edm.String",
            DataType::Timestamp => "Edm.DateTimeOffset",
            DataType::Null => "null",
        };
        write!(f, "{name}")
    }
}
