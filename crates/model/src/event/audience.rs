use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Who may register for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EventAudience {
    #[default]
    Public,
    /// Only the selected users and groups.
    Private,
}

impl EventAudience {
    pub fn code(self) -> u8 {
        match self {
            EventAudience::Public => 0,
            EventAudience::Private => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventAudience::Public => "Public",
            EventAudience::Private => "Private",
        }
    }
}

impl TryFrom<u8> for EventAudience {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EventAudience::Public),
            1 => Ok(EventAudience::Private),
            other => Err(ModelError::UnknownAudienceCode(other)),
        }
    }
}

impl From<EventAudience> for u8 {
    fn from(audience: EventAudience) -> Self {
        audience.code()
    }
}

impl FromStr for EventAudience {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" | "0" => Ok(EventAudience::Public),
            "private" | "1" => Ok(EventAudience::Private),
            _ => Err(ModelError::UnknownAudience(s.to_string())),
        }
    }
}

impl fmt::Display for EventAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
