use super::{FilterStrategy, has_attendees, is_active, saturating_add, within};
use crate::{clock::start_of_day, params::SearchParameters, scenario::Scenario};
use chrono::{DateTime, TimeDelta, Utc};
use filter_syntax::FilterExpr;
use model::schema::EventField;

/// Active events starting tomorrow (UTC) that have at least one registrant.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayBeforeReminderStrategy;

impl FilterStrategy for DayBeforeReminderStrategy {
    fn scenario(&self) -> Scenario {
        Scenario::DayBeforeReminder
    }

    fn build(&self, _params: &SearchParameters, now: DateTime<Utc>) -> FilterExpr {
        let tomorrow = saturating_add(start_of_day(now), TimeDelta::days(1));
        FilterExpr::conjunction([
            is_active(),
            within(
                EventField::StartDate,
                tomorrow,
                saturating_add(tomorrow, TimeDelta::days(1)),
            ),
            has_attendees(),
        ])
    }
}
