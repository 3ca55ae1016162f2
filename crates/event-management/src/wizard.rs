use crate::{audience::AudienceStep, error::WizardError};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Details,
    Audience,
    Review,
}

impl WizardStep {
    /// One-based page number.
    pub fn page(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Audience => 2,
            WizardStep::Review => 3,
        }
    }
}

/// Event-creation wizard state carried between pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWizard {
    pub step: WizardStep,
    pub audience: AudienceStep,
    pub is_edit: bool,
    pub is_draft: bool,
    /// Snapshot of the selections taken whenever the audience page is left.
    pub selected_user_or_group_list_json: Option<String>,
}

impl EventWizard {
    pub fn new(is_edit: bool, is_draft: bool) -> Self {
        Self {
            step: WizardStep::Details,
            audience: AudienceStep::new(),
            is_edit,
            is_draft,
            selected_user_or_group_list_json: None,
        }
    }

    pub fn can_save_draft(&self) -> bool {
        crate::audience::can_save_draft(self.is_edit, self.is_draft)
    }

    /// Takes the same selection snapshot as navigation and returns it.
    pub fn save_draft(&mut self) -> Result<String, WizardError> {
        if !self.can_save_draft() {
            return Err(WizardError::DraftNotAllowed);
        }
        let json = self.audience.selection_json()?;
        self.selected_user_or_group_list_json = Some(json.clone());
        info!(page = self.step.page(), "Saved wizard draft");
        Ok(json)
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::Details => WizardStep::Audience,
            WizardStep::Audience => {
                if !self.audience.can_proceed() {
                    return Err(WizardError::AudienceRequired);
                }
                WizardStep::Review
            }
            WizardStep::Review => return Err(WizardError::AtLastStep),
        };
        self.move_to(target)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::Details => return Err(WizardError::AtFirstStep),
            WizardStep::Audience => WizardStep::Details,
            WizardStep::Review => WizardStep::Audience,
        };
        self.move_to(target)
    }

    fn move_to(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Audience {
            self.selected_user_or_group_list_json = Some(self.audience.selection_json()?);
        }
        info!(from = self.step.page(), to = target.page(), "Wizard navigation");
        self.step = target;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audience::AudienceSelection;
    use model::event::EventAudience;

    #[test]
    fn test_next_goes_to_review_and_snapshots_selection() {
        let mut wizard = EventWizard::new(false, false);
        assert_eq!(wizard.next().unwrap(), WizardStep::Audience);

        wizard.audience.set_audience(EventAudience::Private);
        assert!(matches!(wizard.next(), Err(WizardError::AudienceRequired)));
        assert_eq!(wizard.step, WizardStep::Audience);

        wizard
            .audience
            .add_selection(AudienceSelection::group("g-1", "Operations"));
        assert_eq!(wizard.next().unwrap(), WizardStep::Review);
        assert_eq!(wizard.step.page(), 3);

        let json = wizard.selected_user_or_group_list_json.as_deref().unwrap();
        assert!(json.contains(r#""id":"g-1""#));
    }

    #[test]
    fn test_back_carries_state_to_details() {
        let mut wizard = EventWizard::new(true, true);
        wizard.next().unwrap();
        wizard.audience.toggle_send_notification();

        assert_eq!(wizard.back().unwrap(), WizardStep::Details);
        assert!(wizard.audience.send_notification);
        assert_eq!(wizard.selected_user_or_group_list_json.as_deref(), Some("[]"));
        assert!(matches!(wizard.back(), Err(WizardError::AtFirstStep)));
    }

    #[test]
    fn test_edit_of_published_event_cannot_save_draft() {
        assert!(!EventWizard::new(true, false).can_save_draft());
        assert!(EventWizard::new(false, false).can_save_draft());
    }

    #[test]
    fn test_save_draft_snapshots_current_selection() {
        let mut wizard = EventWizard::new(false, false);
        wizard.next().unwrap();
        wizard
            .audience
            .add_selection(AudienceSelection::group("g-1", "Operations"));

        let json = wizard.save_draft().unwrap();
        assert_eq!(json, wizard.audience.selection_json().unwrap());
        assert_eq!(wizard.selected_user_or_group_list_json.as_deref(), Some(json.as_str()));
        assert_eq!(wizard.step, WizardStep::Audience);
    }

    #[test]
    fn test_save_draft_rejected_for_published_event() {
        let mut wizard = EventWizard::new(true, false);
        assert!(matches!(wizard.save_draft(), Err(WizardError::DraftNotAllowed)));
        assert_eq!(wizard.selected_user_or_group_list_json, None);
    }
}
