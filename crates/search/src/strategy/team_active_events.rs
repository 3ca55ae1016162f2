use super::{FilterStrategy, is_active};
use crate::{params::SearchParameters, scenario::Scenario};
use chrono::{DateTime, Utc};
use filter_syntax::{Comparator, Condition, FilterExpr};
use model::schema::EventField;

/// Active events, narrowed to one team when `team_id` is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamActiveEventsStrategy;

impl FilterStrategy for TeamActiveEventsStrategy {
    fn scenario(&self) -> Scenario {
        Scenario::TeamActiveEvents
    }

    fn build(&self, params: &SearchParameters, _now: DateTime<Utc>) -> FilterExpr {
        let team = params.team_id.as_ref().map(|team| {
            FilterExpr::leaf(Condition::on(
                EventField::TeamId,
                Comparator::Equal,
                team.as_str(),
            ))
        });

        FilterExpr::conjunction(std::iter::once(is_active()).chain(team))
    }
}
