//! parse-rest - HTTP client for the Parse REST API.
//!
//! # Example
//!
//! ```no_run
//! use parse_rest::{Client, Credentials, Object, ObjectMeta, QueryOptions};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct GameScore {
//!     #[serde(flatten)]
//!     meta: ObjectMeta,
//!     player_name: String,
//!     score: i64,
//! }
//!
//! impl Object for GameScore {
//!     fn meta(&self) -> &ObjectMeta {
//!         &self.meta
//!     }
//!
//!     fn meta_mut(&mut self) -> &mut ObjectMeta {
//!         &mut self.meta
//!     }
//! }
//!
//! # async fn example() -> Result<(), parse_rest::Error> {
//! let client = Client::new(Credentials::new("app-id", "rest-key"))?;
//!
//! let options = QueryOptions::new()
//!     .filter(r#"{"score":{"$gte":1000}}"#)
//!     .order("-score")
//!     .limit(10);
//! let top: Vec<GameScore> = client.query(Some(&options)).await?;
//!
//! let mut all = client.iter::<GameScore>()?;
//! while let Some(score) = all.next().await {
//!     println!("{:?}", score?);
//! }
//! # Ok(())
//! # }
//! ```

mod blocking;
mod client;
mod files;
mod hooks;
mod iter;
mod query;
mod rest;
mod users;

pub use blocking::{BlockingClient, BlockingIter};
pub use client::{Client, ClientBuilder};
pub use iter::{DEFAULT_PAGE_SIZE, ObjectIter, Step};

pub use parse_core::{
    ApiUrl, ClassName, Credentials, Error, FileRef, HookFunction, MasterKey, Object, ObjectMeta,
    QueryOptions, Result, ServiceError, SessionToken, SignUpResponse, TraceSink, TriggerFunction,
    User,
};
