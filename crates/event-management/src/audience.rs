//! Audience step of the event-creation wizard: who is invited, who must
//! attend, and whether invitees get registered or notified automatically.

use crate::error::WizardError;
use model::event::EventAudience;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user or group picked as part of a private event's audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSelection {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub is_mandatory: bool,
}

impl AudienceSelection {
    pub fn user(id: impl Into<String>, display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: Some(email.into()),
            is_group: false,
            is_mandatory: true,
        }
    }

    pub fn group(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            is_group: true,
            is_mandatory: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceStep {
    pub audience: EventAudience,
    pub selections: Vec<AudienceSelection>,
    pub is_auto_register: bool,
    pub send_notification: bool,
}

impl AudienceStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user or group as mandatory. Returns `false` when the id is
    /// already selected.
    pub fn add_selection(&mut self, mut selection: AudienceSelection) -> bool {
        if self.selections.iter().any(|s| s.id == selection.id) {
            debug!(id = %selection.id, "Selection already present");
            return false;
        }
        selection.is_mandatory = true;
        self.selections.push(selection);
        true
    }

    pub fn toggle_mandatory(&mut self, index: usize) -> Result<bool, WizardError> {
        let len = self.selections.len();
        let selection = self
            .selections
            .get_mut(index)
            .ok_or(WizardError::SelectionOutOfRange { index, len })?;
        selection.is_mandatory = !selection.is_mandatory;
        Ok(selection.is_mandatory)
    }

    pub fn remove_selection(&mut self, index: usize) -> Result<AudienceSelection, WizardError> {
        if index >= self.selections.len() {
            return Err(WizardError::SelectionOutOfRange {
                index,
                len: self.selections.len(),
            });
        }
        Ok(self.selections.remove(index))
    }

    /// "Mandatory for all" is offered only while something is optional.
    pub fn can_mark_all_mandatory(&self) -> bool {
        self.selections.iter().any(|s| !s.is_mandatory)
    }

    pub fn mark_all_mandatory(&mut self) {
        for selection in &mut self.selections {
            selection.is_mandatory = true;
        }
    }

    pub fn set_audience(&mut self, audience: EventAudience) {
        self.audience = audience;
    }

    pub fn toggle_auto_register(&mut self) -> bool {
        self.is_auto_register = !self.is_auto_register;
        self.is_auto_register
    }

    pub fn toggle_send_notification(&mut self) -> bool {
        self.send_notification = !self.send_notification;
        self.send_notification
    }

    /// A private event cannot move on without an audience.
    pub fn can_proceed(&self) -> bool {
        self.audience != EventAudience::Private || !self.selections.is_empty()
    }

    /// The selections as stored on the event, e.g.
    /// `[{"id":"u1","displayName":"Ana",...}]`.
    pub fn selection_json(&self) -> Result<String, WizardError> {
        Ok(serde_json::to_string(&self.selections)?)
    }
}

/// Drafts can be saved when creating, or when editing an event that is
/// still a draft.
pub fn can_save_draft(is_edit: bool, is_draft: bool) -> bool {
    !is_edit || is_draft
}
