use crate::dialect::{Dialect, OData};
use chrono::{DateTime, Utc};
use model::core::{data_type::DataType, value::Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Boolean(bool),
    String(String),
    DateTime(DateTime<Utc>),
    Null,
}

impl Literal {
    pub fn data_type(&self) -> DataType {
        match self {
            Literal::Int(_) => DataType::Int,
            Literal::Boolean(_) => DataType::Boolean,
            Literal::String(_) => DataType::String,
            Literal::DateTime(_) => DataType::Timestamp,
            Literal::Null => DataType::Null,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Literal::Int(v) => Value::Int(*v),
            Literal::Boolean(v) => Value::Boolean(*v),
            Literal::String(v) => Value::String(v.clone()),
            Literal::DateTime(v) => Value::Timestamp(*v),
            Literal::Null => Value::Null,
        }
    }
}

/// Formats an instant in the round-trip form the search index expects:
/// seven fractional digits and a `Z` suffix, e.g.
/// `2024-01-01T00:00:00.0000000Z`.
pub fn format_round_trip(dt: &DateTime<Utc>) -> String {
    // Leap-second nanos run past 999_999_999.
    let ticks = (dt.timestamp_subsec_nanos() / 100).min(9_999_999);
    format!("{}.{:07}Z", dt.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// Displays as OData literal text.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&OData.render_literal(self))
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Int(i64::from(v))
    }
}

impl From<u32> for Literal {
    fn from(v: u32) -> Self {
        Literal::Int(i64::from(v))
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Boolean(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::String(v)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(v: DateTime<Utc>) -> Self {
        Literal::DateTime(v)
    }
}
