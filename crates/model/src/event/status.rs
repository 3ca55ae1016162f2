use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle status of a training event.
///
/// Serialized as the integer code stored in the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EventStatus {
    Draft,
    Active,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Draft,
        EventStatus::Active,
        EventStatus::Cancelled,
        EventStatus::Completed,
    ];

    pub fn code(self) -> u8 {
        match self {
            EventStatus::Draft => 0,
            EventStatus::Active => 1,
            EventStatus::Cancelled => 2,
            EventStatus::Completed => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Active => "Active",
            EventStatus::Cancelled => "Cancelled",
            EventStatus::Completed => "Completed",
        }
    }
}

impl TryFrom<u8> for EventStatus {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(ModelError::UnknownStatusCode(code))
    }
}

impl From<EventStatus> for u8 {
    fn from(status: EventStatus) -> Self {
        status.code()
    }
}

impl FromStr for EventStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return Self::try_from(code);
        }
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_index_schema() {
        assert_eq!(EventStatus::Draft.code(), 0);
        assert_eq!(EventStatus::Active.code(), 1);
        assert_eq!(EventStatus::Cancelled.code(), 2);
        assert_eq!(EventStatus::Completed.code(), 3);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&EventStatus::Active).unwrap(), "1");
        let status: EventStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, EventStatus::Cancelled);
        assert!(serde_json::from_str::<EventStatus>("9").is_err());
    }

    #[test]
    fn test_from_str_accepts_name_or_code() {
        assert_eq!("active".parse::<EventStatus>().unwrap(), EventStatus::Active);
        assert_eq!("3".parse::<EventStatus>().unwrap(), EventStatus::Completed);
        assert!("archived".parse::<EventStatus>().is_err());
    }
}
