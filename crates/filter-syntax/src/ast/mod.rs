pub mod expr;
pub mod literal;
pub mod operator;

pub use expr::{Condition, FilterExpr};
pub use literal::Literal;
pub use operator::Comparator;
