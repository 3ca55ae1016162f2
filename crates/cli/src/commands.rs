use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use filter_syntax::DialectKind;
use search::Scenario;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the filter a scenario generates
    Filter {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, help = "Output dialect: odata or sql (overrides TRAINING_EVENTS_DIALECT)")]
        dialect: Option<DialectKind>,
    },
    /// Apply a scenario's filter to a JSON array of event records
    Search {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, help = "JSON file holding the event records")]
        records: PathBuf,

        #[arg(
            long,
            help = "If specified, writes the matching records to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
    /// Parse a filter and check it against the event schema
    Validate {
        #[arg(long, help = "OData filter expression")]
        filter: String,
    },
    /// Print the management menu of an event as JSON
    Menu {
        #[arg(long, help = "JSON file holding one event record")]
        event: PathBuf,

        #[arg(long, help = "Evaluate at this instant (RFC 3339) instead of now")]
        at: Option<DateTime<Utc>>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[arg(long, help = "Scenario key, e.g. morning-reminder")]
    pub scenario: Scenario,

    #[arg(long, help = "Generate as of this instant (RFC 3339) instead of now")]
    pub at: Option<DateTime<Utc>>,

    #[arg(long, help = "JSON file holding search parameters")]
    pub params: Option<PathBuf>,

    #[arg(long, help = "Restrict to one team")]
    pub team_id: Option<String>,

    #[arg(long, help = "Look-ahead window in hours for ending-soon")]
    pub window_hours: Option<u32>,
}
