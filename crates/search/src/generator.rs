use crate::{
    clock::{Clock, SystemClock},
    expression::FilterExpression,
    params::SearchParameters,
    scenario::Scenario,
};
use filter_syntax::{DialectKind, FilterExpr};
use std::sync::Arc;
use tracing::info;

/// Dispatches a scenario key to its strategy with a shared clock and
/// output dialect.
#[derive(Clone)]
pub struct FilterQueryGenerator {
    clock: Arc<dyn Clock>,
    dialect: DialectKind,
}

impl Default for FilterQueryGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl FilterQueryGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            dialect: DialectKind::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> DialectKind {
        self.dialect
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The filter tree, before rendering.
    pub fn build(&self, scenario: Scenario, params: &SearchParameters) -> FilterExpr {
        scenario.strategy().build(params, self.clock.now())
    }

    pub fn generate(&self, scenario: Scenario, params: &SearchParameters) -> FilterExpression {
        info!(%scenario, dialect = %self.dialect, "Generating filter query");
        scenario
            .strategy()
            .generate_with_dialect(params, self.clock.as_ref(), self.dialect.dialect())
    }
}
