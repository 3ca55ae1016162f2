use model::core::identifiers::TeamId;
use serde::{Deserialize, Serialize};

/// Scenario inputs supplied by the caller. Every attribute is optional and
/// a strategy reads only the ones it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParameters {
    pub team_id: Option<TeamId>,
    pub window_hours: Option<u32>,
}

impl SearchParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_window_hours(mut self, hours: u32) -> Self {
        self.window_hours = Some(hours);
        self
    }
}
