//! Actions a team owner can take on an event, depending on its status.

use chrono::{DateTime, Utc};
use model::event::{EventRecord, EventStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuAction {
    CloseRegistration,
    Edit,
    ExportDetails,
    SendReminder,
    CancelEvent,
    DeleteDraft,
    DeleteEvent,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CloseRegistration => "Close registration",
            MenuAction::Edit => "Edit",
            MenuAction::ExportDetails => "Export details",
            MenuAction::SendReminder => "Send reminder",
            MenuAction::CancelEvent => "Cancel event",
            MenuAction::DeleteDraft => "Delete draft",
            MenuAction::DeleteEvent => "Delete event",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "action", rename_all = "camelCase")]
pub enum MenuEntry {
    Action(MenuAction),
    Divider,
}

impl MenuEntry {
    pub fn action(&self) -> Option<MenuAction> {
        match self {
            MenuEntry::Action(action) => Some(*action),
            MenuEntry::Divider => None,
        }
    }
}

impl From<MenuAction> for MenuEntry {
    fn from(action: MenuAction) -> Self {
        MenuEntry::Action(action)
    }
}

/// Builds the management menu for `event` as of `now`.
pub fn menu_for(event: &EventRecord, now: DateTime<Utc>) -> Vec<MenuEntry> {
    use MenuAction::*;

    let entries = match event.status {
        EventStatus::Draft => vec![Edit.into(), MenuEntry::Divider, DeleteDraft.into()],
        EventStatus::Cancelled => vec![DeleteEvent.into()],
        EventStatus::Active if !event.has_ended(now) => {
            let mut entries = Vec::with_capacity(7);
            if !event.is_registration_closed {
                entries.push(CloseRegistration.into());
            }
            entries.extend([
                Edit.into(),
                ExportDetails.into(),
                SendReminder.into(),
                MenuEntry::Divider,
                CancelEvent.into(),
            ]);
            entries
        }
        EventStatus::Active => {
            vec![ExportDetails.into(), MenuEntry::Divider, DeleteEvent.into()]
        }
        EventStatus::Completed => Vec::new(),
    };

    debug!(
        event_id = %event.event_id,
        status = %event.status,
        entries = entries.len(),
        "Built event menu"
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use model::event::EventAudience;

    fn event(status: EventStatus, closed: bool) -> EventRecord {
        EventRecord {
            event_id: "e-1".into(),
            team_id: "t-1".into(),
            name: "Forklift safety".to_string(),
            status,
            audience: EventAudience::Public,
            start_date: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap(),
            registered_attendees_count: 3,
            maximum_number_of_participants: 10,
            is_registration_closed: closed,
        }
    }

    fn actions(entries: &[MenuEntry]) -> Vec<Option<MenuAction>> {
        entries.iter().map(MenuEntry::action).collect()
    }

    fn before_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn after_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_running_event_with_open_registration() {
        let menu = menu_for(&event(EventStatus::Active, false), before_end());
        assert_eq!(
            actions(&menu),
            vec![
                Some(MenuAction::CloseRegistration),
                Some(MenuAction::Edit),
                Some(MenuAction::ExportDetails),
                Some(MenuAction::SendReminder),
                None,
                Some(MenuAction::CancelEvent),
            ]
        );
    }

    #[test]
    fn test_closed_registration_hides_close_action() {
        let menu = menu_for(&event(EventStatus::Active, true), before_end());
        assert_eq!(menu.first(), Some(&MenuEntry::Action(MenuAction::Edit)));
        assert_eq!(menu.len(), 5);
    }

    #[test]
    fn test_ended_event_is_export_and_delete() {
        assert_eq!(
            menu_for(&event(EventStatus::Active, false), after_end()),
            vec![
                MenuEntry::Action(MenuAction::ExportDetails),
                MenuEntry::Divider,
                MenuEntry::Action(MenuAction::DeleteEvent),
            ]
        );
    }

    #[test]
    fn test_completed_event_has_no_menu() {
        assert!(menu_for(&event(EventStatus::Completed, false), before_end()).is_empty());
        assert!(menu_for(&event(EventStatus::Completed, true), after_end()).is_empty());
    }

    #[test]
    fn test_draft_and_cancelled() {
        assert_eq!(
            menu_for(&event(EventStatus::Draft, false), before_end()),
            vec![
                MenuEntry::Action(MenuAction::Edit),
                MenuEntry::Divider,
                MenuEntry::Action(MenuAction::DeleteDraft),
            ]
        );
        assert_eq!(
            menu_for(&event(EventStatus::Cancelled, false), before_end()),
            vec![MenuEntry::Action(MenuAction::DeleteEvent)]
        );
    }

    #[test]
    fn test_entries_serialize_with_kind_tag() {
        let json = serde_json::to_value(MenuEntry::Action(MenuAction::SendReminder)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "action", "action": "sendReminder" }));
        let json = serde_json::to_value(MenuEntry::Divider).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "divider" }));
    }
}
