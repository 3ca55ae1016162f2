use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown event status code: {0}")]
    UnknownStatusCode(u8),

    #[error("Unknown event status: {0}")]
    UnknownStatus(String),

    #[error("Unknown event audience code: {0}")]
    UnknownAudienceCode(u8),

    #[error("Unknown event audience: {0}")]
    UnknownAudience(String),
}
