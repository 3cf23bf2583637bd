//! Hooks and triggers command implementations.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct HooksArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run_hooks(connection: &ConnectionArgs, args: HooksArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let hooks = client
        .hook_functions()
        .await
        .context("Failed to list function hooks")?;

    if hooks.is_empty() {
        eprintln!("{}", "No function hooks registered.".dimmed());
    }
    for hook in &hooks {
        print(hook, args.pretty)?;
    }
    Ok(())
}

pub async fn run_triggers(connection: &ConnectionArgs, args: HooksArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let triggers = client
        .trigger_functions()
        .await
        .context("Failed to list trigger hooks")?;

    if triggers.is_empty() {
        eprintln!("{}", "No trigger hooks registered.".dimmed());
    }
    for trigger in &triggers {
        print(trigger, args.pretty)?;
    }
    Ok(())
}

fn print<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    if pretty {
        output::json_pretty(value)
    } else {
        output::json(value)
    }
}
