//! Canonical field names of the event search index.
//!
//! Filter expressions must reference these names exactly; the index is
//! case-sensitive.

use crate::core::{data_type::DataType, value::Value};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventField {
    EventId,
    TeamId,
    Name,
    Status,
    Audience,
    StartDate,
    EndDate,
    RegisteredAttendeesCount,
    MaximumNumberOfParticipants,
    IsRegistrationClosed,
}

lazy_static! {
    static ref FIELDS_BY_NAME: HashMap<&'static str, EventField> = EventField::ALL
        .iter()
        .map(|field| (field.name(), *field))
        .collect();
}

impl EventField {
    pub const ALL: [EventField; 10] = [
        EventField::EventId,
        EventField::TeamId,
        EventField::Name,
        EventField::Status,
        EventField::Audience,
        EventField::StartDate,
        EventField::EndDate,
        EventField::RegisteredAttendeesCount,
        EventField::MaximumNumberOfParticipants,
        EventField::IsRegistrationClosed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventField::EventId => "EventId",
            EventField::TeamId => "TeamId",
            EventField::Name => "Name",
            EventField::Status => "Status",
            EventField::Audience => "Audience",
            EventField::StartDate => "StartDate",
            EventField::EndDate => "EndDate",
            EventField::RegisteredAttendeesCount => "RegisteredAttendeesCount",
            EventField::MaximumNumberOfParticipants => "MaximumNumberOfParticipants",
            EventField::IsRegistrationClosed => "IsRegistrationClosed",
        }
    }

    pub fn data_type(self) -> DataType {
        match self {
            EventField::EventId | EventField::TeamId | EventField::Name => DataType::String,
            EventField::Status
            | EventField::Audience
            | EventField::RegisteredAttendeesCount
            | EventField::MaximumNumberOfParticipants => DataType::Int,
            EventField::StartDate | EventField::EndDate => DataType::Timestamp,
            EventField::IsRegistrationClosed => DataType::Boolean,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        FIELDS_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declares which fields a record type exposes to filter expressions.
pub trait RecordSchema {
    fn field_type(&self, name: &str) -> Option<DataType>;

    fn field_names(&self) -> Vec<&'static str>;
}

/// Supplies field values when a filter is evaluated in-process.
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<Value>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EventSchema;

impl RecordSchema for EventSchema {
    fn field_type(&self, name: &str) -> Option<DataType> {
        EventField::from_name(name).map(EventField::data_type)
    }

    fn field_names(&self) -> Vec<&'static str> {
        EventField::ALL.iter().map(|f| f.name()).collect()
    }
}
