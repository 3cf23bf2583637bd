//! Query command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use parse_rest::{ClassName, QueryOptions};

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Class to query
    pub class: String,

    /// Filter as a JSON object, e.g. '{"score":{"$gt":10}}'
    #[arg(long = "where")]
    pub filter: Option<String>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort keys, comma separated; prefix with '-' for descending
    #[arg(long)]
    pub order: Option<String>,

    /// Number of results to skip
    #[arg(long)]
    pub skip: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(connection: &ConnectionArgs, args: QueryArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let class = ClassName::new(&args.class).context("Invalid class name")?;

    let mut options = QueryOptions::new();
    if let Some(filter) = args.filter {
        // Catch typos locally instead of as a service-side 107.
        serde_json::from_str::<Value>(&filter).context("--where is not valid JSON")?;
        options = options.filter(filter);
    }
    if let Some(limit) = args.limit {
        options = options.limit(limit);
    }
    if let Some(order) = args.order {
        options = options.order(order);
    }
    if let Some(skip) = args.skip {
        options = options.skip(skip);
    }

    let records: Vec<Value> = client
        .query_class(&class, Some(&options))
        .await
        .context("Query failed")?;

    if records.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    for record in &records {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    Ok(())
}
