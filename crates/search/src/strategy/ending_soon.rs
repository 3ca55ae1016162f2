use super::{FilterStrategy, is_active, saturating_add, within};
use crate::{params::SearchParameters, scenario::Scenario};
use chrono::{DateTime, TimeDelta, Utc};
use filter_syntax::FilterExpr;
use model::schema::EventField;

pub const DEFAULT_WINDOW_HOURS: u32 = 24;

/// One leap year; longer windows are clamped to this.
pub const MAX_WINDOW_HOURS: u32 = 8784;

/// Active events whose end falls within the next `window_hours`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndingSoonStrategy;

impl EndingSoonStrategy {
    pub fn window(params: &SearchParameters) -> TimeDelta {
        let hours = params
            .window_hours
            .unwrap_or(DEFAULT_WINDOW_HOURS)
            .clamp(1, MAX_WINDOW_HOURS);
        TimeDelta::hours(i64::from(hours))
    }
}

impl FilterStrategy for EndingSoonStrategy {
    fn scenario(&self) -> Scenario {
        Scenario::EndingSoon
    }

    fn build(&self, params: &SearchParameters, now: DateTime<Utc>) -> FilterExpr {
        FilterExpr::conjunction([
            is_active(),
            within(
                EventField::EndDate,
                now,
                saturating_add(now, Self::window(params)),
            ),
        ])
    }
}
