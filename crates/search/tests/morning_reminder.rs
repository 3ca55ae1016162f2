//! Behavioural properties of the morning reminder filter, checked by parsing
//! the generated text and evaluating it against event records.

use chrono::{DateTime, TimeZone, Utc};
use filter_engine::{Evaluate, RecordFilter};
use filter_syntax::{FilterExpr, parse, referenced_fields};
use model::{
    event::{EventAudience, EventRecord, EventStatus},
    schema::EventField,
};
use search::{FilterStrategy, FixedClock, SearchParameters, strategy::MorningReminderStrategy};
use tracing_test::traced_test;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn event(id: &str, status: EventStatus, start: DateTime<Utc>, attendees: u32) -> EventRecord {
    EventRecord {
        event_id: id.into(),
        team_id: "team-a".into(),
        name: format!("Event {id}"),
        status,
        audience: EventAudience::Public,
        start_date: start,
        end_date: start + chrono::TimeDelta::hours(2),
        registered_attendees_count: attendees,
        maximum_number_of_participants: 30,
        is_registration_closed: false,
    }
}

fn reminder_filter(now: DateTime<Utc>) -> FilterExpr {
    let text = MorningReminderStrategy
        .generate_filter_query(&SearchParameters::new(), &FixedClock(now))
        .into_string();
    parse(&text).unwrap()
}

#[test]
fn test_deterministic_for_fixed_instant() {
    let clock = FixedClock(at(2024, 3, 15, 9, 0, 0));
    let first = MorningReminderStrategy.generate_filter_query(&SearchParameters::new(), &clock);
    let second = MorningReminderStrategy.generate_filter_query(&SearchParameters::new(), &clock);
    assert_eq!(first, second);
}

#[test]
fn test_half_open_day_boundary() {
    let filter = reminder_filter(at(2024, 3, 15, 9, 0, 0));
    let matches =
        |start| filter.matches(&event("x", EventStatus::Active, start, 1)).unwrap();

    assert!(matches(at(2024, 3, 15, 0, 0, 0)));
    assert!(matches(at(2024, 3, 15, 23, 59, 59)));
    assert!(!matches(at(2024, 3, 14, 23, 59, 59)));
    assert!(!matches(at(2024, 3, 16, 0, 0, 0)));
}

#[test]
fn test_only_active_events_match() {
    let filter = reminder_filter(at(2024, 3, 15, 9, 0, 0));
    let start = at(2024, 3, 15, 14, 0, 0);

    for status in EventStatus::ALL {
        let matched = filter.matches(&event("x", status, start, 5)).unwrap();
        assert_eq!(matched, status == EventStatus::Active, "status {status}");
    }
}

#[test]
fn test_events_without_registrants_never_match() {
    let filter = reminder_filter(at(2024, 3, 15, 9, 0, 0));
    let record = event("x", EventStatus::Active, at(2024, 3, 15, 14, 0, 0), 0);
    assert!(!filter.matches(&record).unwrap());
}

#[test]
fn test_fields_match_schema_exactly() {
    let filter = reminder_filter(at(2024, 3, 15, 9, 0, 0));
    let fields = referenced_fields(&filter);

    assert_eq!(
        fields,
        vec!["RegisteredAttendeesCount", "StartDate", "Status"]
    );
    for field in &fields {
        let exact = EventField::ALL.iter().filter(|f| f.name() == field).count();
        assert_eq!(exact, 1, "{field} must name exactly one schema field");
    }
    assert!(filter_syntax::validate(&filter, &model::schema::EventSchema).is_ok());
}

#[test]
#[traced_test]
fn test_end_to_end_selection() {
    let records = vec![
        event("a", EventStatus::Active, at(2024, 3, 15, 14, 0, 0), 5),
        event("b", EventStatus::Active, at(2024, 3, 16, 1, 0, 0), 5),
        event("c", EventStatus::Draft, at(2024, 3, 15, 14, 0, 0), 5),
    ];

    let filter = RecordFilter::with_expr(reminder_filter(at(2024, 3, 15, 9, 0, 0)));
    let selected = filter.select(&records).unwrap();

    let ids: Vec<&str> = selected.iter().map(|r| r.event_id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
    assert!(logs_contain("Generated filter"));
}
