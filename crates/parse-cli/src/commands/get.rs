//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use parse_rest::ClassName;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Class the object belongs to
    pub class: String,

    /// Object id
    pub object_id: String,
}

pub async fn run(connection: &ConnectionArgs, args: GetArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let class = ClassName::new(&args.class).context("Invalid class name")?;

    let object: Value = client
        .get_class(&class, &args.object_id)
        .await
        .context("Failed to get object")?;

    output::json_pretty(&object)
}
