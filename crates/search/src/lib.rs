//! Filter-generating strategies for training-event notifications and
//! reports. Each scenario builds one filter for the search index from the
//! current instant and the caller's parameters.

pub mod clock;
pub mod error;
pub mod expression;
pub mod generator;
pub mod params;
pub mod scenario;
pub mod strategy;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ScenarioParseError;
pub use expression::FilterExpression;
pub use generator::FilterQueryGenerator;
pub use params::SearchParameters;
pub use scenario::Scenario;
pub use strategy::FilterStrategy;
