//! Evaluates filter expressions against in-memory records.

pub mod comparator;
pub mod error;
pub mod eval;

pub use error::EvalError;
pub use eval::{Evaluate, RecordFilter};
