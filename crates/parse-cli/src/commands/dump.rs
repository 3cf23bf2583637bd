//! Dump command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;
use serde_json::Value;

use parse_rest::{ClassName, DEFAULT_PAGE_SIZE};

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Class to dump
    pub class: String,

    /// Records fetched per request
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

pub async fn run(connection: &ConnectionArgs, args: DumpArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let class = ClassName::new(&args.class).context("Invalid class name")?;

    let records = client
        .iter_class::<Value>(class)
        .with_page_size(args.page_size)
        .context("Invalid page size")?
        .into_stream();
    futures_util::pin_mut!(records);

    let mut count = 0u64;
    while let Some(record) = records.next().await {
        let record = record.with_context(|| format!("Dump stopped after {} records", count))?;
        output::json(&record)?;
        count += 1;
    }

    eprintln!("{}", format!("{} records", count).dimmed());
    Ok(())
}
