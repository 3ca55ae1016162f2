use super::{FilterStrategy, has_attendees, is_active, saturating_add, within};
use crate::{clock::start_of_day, params::SearchParameters, scenario::Scenario};
use chrono::{DateTime, TimeDelta, Utc};
use filter_syntax::FilterExpr;
use model::schema::EventField;

/// Active events starting today (UTC) that have at least one registrant.
#[derive(Debug, Clone, Copy, Default)]
pub struct MorningReminderStrategy;

impl FilterStrategy for MorningReminderStrategy {
    fn scenario(&self) -> Scenario {
        Scenario::MorningReminder
    }

    fn build(&self, _params: &SearchParameters, now: DateTime<Utc>) -> FilterExpr {
        let today = start_of_day(now);
        FilterExpr::conjunction([
            is_active(),
            within(
                EventField::StartDate,
                today,
                saturating_add(today, TimeDelta::days(1)),
            ),
            has_attendees(),
        ])
    }
}
