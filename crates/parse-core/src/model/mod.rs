//! Service entity types for the pass-through endpoints.

mod file;
mod hooks;
mod user;

pub use file::FileRef;
pub use hooks::{HookFunction, TriggerFunction};
pub use user::{SignUpResponse, User};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response to creating an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedObject {
    pub object_id: String,
    pub created_at: DateTime<Utc>,
}

/// Response to updating an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedObject {
    pub updated_at: DateTime<Utc>,
}
