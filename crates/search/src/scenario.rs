use crate::{
    error::ScenarioParseError,
    strategy::{
        DayBeforeReminderStrategy, EndingSoonStrategy, FilterStrategy, MorningReminderStrategy,
        TeamActiveEventsStrategy,
    },
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Explicit key the caller uses to pick a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    MorningReminder,
    DayBeforeReminder,
    EndingSoon,
    TeamActiveEvents,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::MorningReminder,
        Scenario::DayBeforeReminder,
        Scenario::EndingSoon,
        Scenario::TeamActiveEvents,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Scenario::MorningReminder => "morning-reminder",
            Scenario::DayBeforeReminder => "day-before-reminder",
            Scenario::EndingSoon => "ending-soon",
            Scenario::TeamActiveEvents => "team-active-events",
        }
    }

    pub fn strategy(self) -> &'static dyn FilterStrategy {
        match self {
            Scenario::MorningReminder => &MorningReminderStrategy,
            Scenario::DayBeforeReminder => &DayBeforeReminderStrategy,
            Scenario::EndingSoon => &EndingSoonStrategy,
            Scenario::TeamActiveEvents => &TeamActiveEventsStrategy,
        }
    }
}

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.key() == key)
            .ok_or_else(|| ScenarioParseError {
                key: s.to_string(),
                expected: Scenario::ALL
                    .iter()
                    .map(|scenario| scenario.key())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
