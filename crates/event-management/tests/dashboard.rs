use chrono::{TimeZone, Utc};
use event_management::{MenuAction, MenuEntry, menu_for};
use model::event::EventRecord;

const RUNNING_EVENT: &str = r#"{
    "eventId": "evt-42",
    "teamId": "19:team@thread.skype",
    "name": "First aid refresher",
    "status": 1,
    "audience": 1,
    "startDate": "2024-03-15T09:00:00Z",
    "endDate": "2024-03-15T17:00:00Z",
    "registeredAttendeesCount": 12,
    "maximumNumberOfParticipants": 12,
    "isRegistrationClosed": true
}"#;

#[test]
fn test_menu_for_stored_event() {
    let event: EventRecord = serde_json::from_str(RUNNING_EVENT).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();

    let actions: Vec<MenuAction> = menu_for(&event, now)
        .iter()
        .filter_map(MenuEntry::action)
        .collect();
    assert_eq!(
        actions,
        vec![
            MenuAction::Edit,
            MenuAction::ExportDetails,
            MenuAction::SendReminder,
            MenuAction::CancelEvent,
        ]
    );
}

#[test]
fn test_menu_switches_at_end_date() {
    let event: EventRecord = serde_json::from_str(RUNNING_EVENT).unwrap();
    let at_end = Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap();

    let menu = menu_for(&event, at_end);
    assert_eq!(menu.last(), Some(&MenuEntry::Action(MenuAction::DeleteEvent)));
    assert_eq!(
        serde_json::to_string(&menu).unwrap(),
        r#"[{"kind":"action","action":"exportDetails"},{"kind":"divider"},{"kind":"action","action":"deleteEvent"}]"#
    );
}
