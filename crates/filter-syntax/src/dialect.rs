//! Defines the `Dialect` trait for query-language-specific filter syntax.

use crate::ast::{
    literal::{Literal, format_round_trip},
    operator::Comparator,
};
use chrono::SecondsFormat;
use std::{fmt, str::FromStr};

pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect (e.g., "OData", "SQL").
    fn name(&self) -> &'static str;

    /// Renders a field name the way the target language expects it.
    ///
    /// - OData uses the bare name: `StartDate`
    /// - SQL uses double quotes: `"StartDate"`
    fn quote_identifier(&self, ident: &str) -> String;

    fn comparator(&self, op: Comparator) -> &'static str;

    fn and_keyword(&self) -> &'static str;

    fn or_keyword(&self) -> &'static str;

    fn not_keyword(&self) -> &'static str;

    fn render_literal(&self, literal: &Literal) -> String;

    /// Renders the boolean constants, used for empty groups.
    fn render_const(&self, value: bool) -> &'static str;

    /// Renders a whole `field op literal` comparison.
    fn render_condition(&self, field: &str, op: Comparator, literal: &Literal) -> String {
        format!(
            "{} {} {}",
            self.quote_identifier(field),
            self.comparator(op),
            self.render_literal(literal)
        )
    }
}

/// The OData `$filter` syntax accepted by the hosted search index.
#[derive(Debug, Clone, Copy, Default)]
pub struct OData;

impl Dialect for OData {
    fn name(&self) -> &'static str {
        "OData"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn comparator(&self, op: Comparator) -> &'static str {
        op.keyword()
    }

    fn and_keyword(&self) -> &'static str {
        "and"
    }

    fn or_keyword(&self) -> &'static str {
        "or"
    }

    fn not_keyword(&self) -> &'static str {
        "not"
    }

    fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Int(v) => v.to_string(),
            Literal::Boolean(v) => v.to_string(),
            Literal::String(v) => format!("'{}'", v.replace('\'', "''")),
            Literal::DateTime(v) => format_round_trip(v),
            Literal::Null => "null".to_string(),
        }
    }

    fn render_const(&self, value: bool) -> &'static str {
        if value { "true" } else { "false" }
    }
}

/// A PostgreSQL-flavoured `WHERE` clause body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sql;

impl Dialect for Sql {
    fn name(&self) -> &'static str {
        "SQL"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', "\"\""))
    }

    fn comparator(&self, op: Comparator) -> &'static str {
        match op {
            Comparator::Equal => "=",
            Comparator::NotEqual => "<>",
            Comparator::GreaterThan => ">",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessThan => "<",
            Comparator::LessOrEqual => "<=",
        }
    }

    fn and_keyword(&self) -> &'static str {
        "AND"
    }

    fn or_keyword(&self) -> &'static str {
        "OR"
    }

    fn not_keyword(&self) -> &'static str {
        "NOT"
    }

    fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Int(v) => v.to_string(),
            Literal::Boolean(v) => self.render_const(*v).to_string(),
            Literal::String(v) => format!("'{}'", v.replace('\'', "''")),
            Literal::DateTime(v) => format!(
                "TIMESTAMPTZ '{}'",
                v.to_rfc3339_opts(SecondsFormat::Nanos, true)
            ),
            Literal::Null => "NULL".to_string(),
        }
    }

    fn render_const(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }

    fn render_condition(&self, field: &str, op: Comparator, literal: &Literal) -> String {
        // `= NULL` never matches in SQL.
        match (op, literal) {
            (Comparator::Equal, Literal::Null) => {
                format!("{} IS NULL", self.quote_identifier(field))
            }
            (Comparator::NotEqual, Literal::Null) => {
                format!("{} IS NOT NULL", self.quote_identifier(field))
            }
            _ => format!(
                "{} {} {}",
                self.quote_identifier(field),
                self.comparator(op),
                self.render_literal(literal)
            ),
        }
    }
}

/// Selects a dialect by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialectKind {
    #[default]
    OData,
    Sql,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::OData => &OData,
            DialectKind::Sql => &Sql,
        }
    }
}

impl FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "odata" => Ok(DialectKind::OData),
            "sql" | "postgres" => Ok(DialectKind::Sql),
            _ => Err(format!("Unsupported filter dialect: {s}")),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dialect().name())
    }
}
