use crate::{
    clock::Clock, expression::FilterExpression, params::SearchParameters, scenario::Scenario,
};
use chrono::{DateTime, TimeDelta, Utc};
use filter_syntax::{
    Comparator, Condition, Dialect, FilterExpr, OData, render,
};
use model::{event::EventStatus, schema::EventField};
use tracing::debug;

pub mod day_before_reminder;
pub mod ending_soon;
pub mod morning_reminder;
pub mod team_active_events;

pub use day_before_reminder::DayBeforeReminderStrategy;
pub use ending_soon::EndingSoonStrategy;
pub use morning_reminder::MorningReminderStrategy;
pub use team_active_events::TeamActiveEventsStrategy;

/// A query builder for one notification or report scenario.
///
/// Implementations are pure: the same instant and parameters always yield
/// the same filter.
pub trait FilterStrategy: Send + Sync {
    fn scenario(&self) -> Scenario;

    /// Builds the filter tree for the instant `now`.
    fn build(&self, params: &SearchParameters, now: DateTime<Utc>) -> FilterExpr;

    /// Renders the filter in the search index's OData syntax.
    fn generate_filter_query(
        &self,
        params: &SearchParameters,
        clock: &dyn Clock,
    ) -> FilterExpression {
        self.generate_with_dialect(params, clock, &OData)
    }

    fn generate_with_dialect(
        &self,
        params: &SearchParameters,
        clock: &dyn Clock,
        dialect: &dyn Dialect,
    ) -> FilterExpression {
        let expr = self.build(params, clock.now());
        let filter = FilterExpression::new(render(&expr, dialect));
        debug!(
            scenario = %self.scenario(),
            dialect = dialect.name(),
            "Generated filter: {}", filter
        );
        filter
    }
}

pub(crate) fn is_active() -> FilterExpr {
    FilterExpr::leaf(Condition::on(
        EventField::Status,
        Comparator::Equal,
        EventStatus::Active.code() as i64,
    ))
}

/// `instant + delta`, pinned to the last representable instant on overflow.
pub(crate) fn saturating_add(instant: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    instant
        .checked_add_signed(delta)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `field ge start and field lt end`
pub(crate) fn within(field: EventField, start: DateTime<Utc>, end: DateTime<Utc>) -> FilterExpr {
    FilterExpr::and(vec![
        FilterExpr::leaf(Condition::on(field, Comparator::GreaterOrEqual, start)),
        FilterExpr::leaf(Condition::on(field, Comparator::LessThan, end)),
    ])
}

pub(crate) fn has_attendees() -> FilterExpr {
    FilterExpr::leaf(Condition::on(
        EventField::RegisteredAttendeesCount,
        Comparator::GreaterThan,
        0,
    ))
}
