pub mod core;
pub mod error;
pub mod event;
pub mod schema;

pub use error::ModelError;
