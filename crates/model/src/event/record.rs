use crate::{
    core::{
        identifiers::{EventId, TeamId},
        value::Value,
    },
    event::{audience::EventAudience, status::EventStatus},
    schema::{EventField, FieldSource},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event as stored in the search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_id: EventId,
    pub team_id: TeamId,
    pub name: String,
    pub status: EventStatus,
    #[serde(default)]
    pub audience: EventAudience,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub registered_attendees_count: u32,
    #[serde(default)]
    pub maximum_number_of_participants: u32,
    #[serde(default)]
    pub is_registration_closed: bool,
}

impl EventRecord {
    pub fn value_of(&self, field: EventField) -> Value {
        match field {
            EventField::EventId => Value::String(self.event_id.as_str().to_string()),
            EventField::TeamId => Value::String(self.team_id.as_str().to_string()),
            EventField::Name => Value::String(self.name.clone()),
            EventField::Status => Value::Int(self.status.code() as i64),
            EventField::Audience => Value::Int(self.audience.code() as i64),
            EventField::StartDate => Value::Timestamp(self.start_date),
            EventField::EndDate => Value::Timestamp(self.end_date),
            EventField::RegisteredAttendeesCount => {
                Value::Int(self.registered_attendees_count as i64)
            }
            EventField::MaximumNumberOfParticipants => {
                Value::Int(self.maximum_number_of_participants as i64)
            }
            EventField::IsRegistrationClosed => Value::Boolean(self.is_registration_closed),
        }
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_date
    }
}

impl FieldSource for EventRecord {
    fn field_value(&self, name: &str) -> Option<Value> {
        EventField::from_name(name).map(|field| self.value_of(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> EventRecord {
        EventRecord {
            event_id: "e-1".into(),
            team_id: "t-1".into(),
            name: "Rust onboarding".to_string(),
            status: EventStatus::Active,
            audience: EventAudience::Private,
            start_date: Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap(),
            registered_attendees_count: 5,
            maximum_number_of_participants: 20,
            is_registration_closed: false,
        }
    }

    #[test]
    fn test_field_values_use_index_encoding() {
        let record = sample();
        assert_eq!(record.field_value("Status"), Some(Value::Int(1)));
        assert_eq!(record.field_value("Audience"), Some(Value::Int(1)));
        assert_eq!(record.field_value("RegisteredAttendeesCount"), Some(Value::Int(5)));
        assert_eq!(record.field_value("status"), None);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"
            {
                "eventId": "e-9",
                "teamId": "t-1",
                "name": "Security basics",
                "status": 0,
                "startDate": "2024-03-15T14:00:00Z",
                "endDate": "2024-03-15T15:00:00Z"
            }
        "#;
        let record: EventRecord = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(record.status, EventStatus::Draft);
        assert_eq!(record.audience, EventAudience::Public);
        assert_eq!(record.registered_attendees_count, 0);
        assert!(!record.is_registration_closed);
    }

    #[test]
    fn test_has_ended() {
        let record = sample();
        assert!(!record.has_ended(Utc.with_ymd_and_hms(2024, 3, 15, 15, 59, 59).unwrap()));
        assert!(record.has_ended(Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap()));
    }
}
