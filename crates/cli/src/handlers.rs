use crate::{commands::QueryArgs, env::Settings, error::CliError};
use chrono::{DateTime, Utc};
use event_management::{MenuEntry, menu_for};
use filter_engine::RecordFilter;
use filter_syntax::{DialectKind, FilterExpr, parse, referenced_fields, validate};
use model::{event::EventRecord, schema::EventSchema};
use search::{
    Clock, FilterExpression, FilterQueryGenerator, FixedClock, SearchParameters, SystemClock,
};
use serde::Serialize;
use std::{path::Path, sync::Arc};
use tracing::{debug, info};

fn clock_at(at: Option<DateTime<Utc>>) -> Arc<dyn Clock> {
    match at {
        Some(instant) => Arc::new(FixedClock(instant)),
        None => Arc::new(SystemClock),
    }
}

/// Merges parameters: explicit flags, then the params file, then settings.
async fn search_parameters(
    query: &QueryArgs,
    settings: &Settings,
) -> Result<SearchParameters, CliError> {
    let mut params = match &query.params {
        Some(path) => serde_json::from_str(&tokio::fs::read_to_string(path).await?)?,
        None => SearchParameters::new(),
    };

    if let Some(team_id) = &query.team_id {
        params.team_id = Some(team_id.as_str().into());
    }
    params.window_hours = query
        .window_hours
        .or(params.window_hours)
        .or(settings.ending_soon_hours);

    debug!(?params, "Resolved search parameters");
    Ok(params)
}

pub async fn generate_filter(
    query: &QueryArgs,
    dialect: Option<DialectKind>,
    settings: &Settings,
) -> Result<FilterExpression, CliError> {
    let params = search_parameters(query, settings).await?;
    let generator =
        FilterQueryGenerator::new(clock_at(query.at)).with_dialect(dialect.unwrap_or(settings.dialect));
    Ok(generator.generate(query.scenario, &params))
}

pub async fn search_records(
    query: &QueryArgs,
    records_path: &Path,
    settings: &Settings,
) -> Result<Vec<EventRecord>, CliError> {
    let params = search_parameters(query, settings).await?;
    let records: Vec<EventRecord> =
        serde_json::from_str(&tokio::fs::read_to_string(records_path).await?)?;

    // Round-trip through the OData text so the search runs exactly what the
    // index would receive.
    let generator = FilterQueryGenerator::new(clock_at(query.at));
    let text = generator.generate(query.scenario, &params);
    let filter = RecordFilter::with_expr(parse(text.as_str())?);

    let selected: Vec<EventRecord> = filter.select(&records)?.into_iter().cloned().collect();
    info!(
        scenario = %query.scenario,
        total = records.len(),
        matched = selected.len(),
        "Search complete"
    );
    Ok(selected)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub filter: String,
    pub referenced_fields: Vec<String>,
}

pub fn validate_filter(input: &str) -> Result<ValidationReport, CliError> {
    let expr: FilterExpr = parse(input)?;
    validate(&expr, &EventSchema)?;
    Ok(ValidationReport {
        filter: expr.to_string(),
        referenced_fields: referenced_fields(&expr),
    })
}

pub async fn event_menu(
    event_path: &Path,
    at: Option<DateTime<Utc>>,
) -> Result<Vec<MenuEntry>, CliError> {
    let event: EventRecord = serde_json::from_str(&tokio::fs::read_to_string(event_path).await?)?;
    Ok(menu_for(&event, clock_at(at).now()))
}
