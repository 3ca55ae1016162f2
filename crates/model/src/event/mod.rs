pub mod audience;
pub mod record;
pub mod status;

pub use audience::EventAudience;
pub use record::EventRecord;
pub use status::EventStatus;
