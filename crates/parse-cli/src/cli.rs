//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::{dump::DumpArgs, get::GetArgs, hooks::HooksArgs, query::QueryArgs};

/// Parse REST API command-line client.
#[derive(Parser, Debug)]
#[command(name = "parse")]
#[command(author, version = env!("PARSE_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect and as whom.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Application id
    #[arg(long, env = "PARSE_APPLICATION_ID", global = true)]
    pub app_id: Option<String>,

    /// REST API key
    #[arg(long, env = "PARSE_REST_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Master key, for operations that bypass object permissions
    #[arg(long, env = "PARSE_MASTER_KEY", global = true, hide_env_values = true)]
    pub master_key: Option<String>,

    /// Session token of the user to act as
    #[arg(long, env = "PARSE_SESSION_TOKEN", global = true, hide_env_values = true)]
    pub session_token: Option<String>,

    /// API base URL
    #[arg(long, env = "PARSE_SERVER_URL", global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query a class
    Query(QueryArgs),

    /// Print every record of a class in creation order
    Dump(DumpArgs),

    /// Fetch a single object
    Get(GetArgs),

    /// List cloud function webhooks (needs the master key)
    Hooks(HooksArgs),

    /// List trigger webhooks (needs the master key)
    Triggers(HooksArgs),
}
