//! Subcommand implementations.

pub mod dump;
pub mod get;
pub mod hooks;
pub mod query;

use anyhow::{Context, Result};
use tracing::debug;

use parse_rest::{ApiUrl, Client, Credentials, MasterKey, SessionToken};

use crate::cli::ConnectionArgs;

/// Build a client from the connection flags.
pub fn connect(args: &ConnectionArgs) -> Result<Client> {
    let app_id = args
        .app_id
        .as_deref()
        .context("No application id. Pass --app-id or set PARSE_APPLICATION_ID.")?;
    let api_key = args
        .api_key
        .as_deref()
        .context("No REST API key. Pass --api-key or set PARSE_REST_API_KEY.")?;

    let mut builder = Client::builder(Credentials::new(app_id, api_key));
    if let Some(server) = &args.server {
        builder = builder.server(ApiUrl::new(server).context("Invalid server URL")?);
    }
    if let Some(key) = &args.master_key {
        builder = builder.master_key(MasterKey::new(key.as_str()));
    }
    if let Some(token) = &args.session_token {
        builder = builder.session_token(SessionToken::new(token.as_str()));
    }

    let client = builder.build().context("Failed to create client")?;
    debug!(server = %client.server(), master_key = client.has_master_key(), "Client ready");
    Ok(client)
}
