//! Endpoint paths and wire-only request/response types.

use serde::Deserialize;

use parse_core::ClassName;

// Lowercase so they can be used with `HeaderName::from_static`.
pub const APPLICATION_ID_HEADER: &str = "x-parse-application-id";
pub const REST_API_KEY_HEADER: &str = "x-parse-rest-api-key";
pub const SESSION_TOKEN_HEADER: &str = "x-parse-session-token";
pub const MASTER_KEY_HEADER: &str = "x-parse-master-key";

pub const USERS: &str = "users";
pub const LOGIN: &str = "login";
pub const CURRENT_USER: &str = "users/me";
pub const HOOK_FUNCTIONS: &str = "hooks/functions";
pub const TRIGGER_FUNCTIONS: &str = "triggers/functions";

/// Collection path for a class. System classes have dedicated endpoints.
pub fn class_path(class: &ClassName) -> String {
    match class.as_str() {
        "_User" => USERS.to_string(),
        "_Role" => "roles".to_string(),
        "_Installation" => "installations".to_string(),
        "_Session" => "sessions".to_string(),
        name => format!("classes/{}", name),
    }
}

/// Path of a single object within a class.
pub fn object_path(class: &ClassName, object_id: &str) -> String {
    format!("{}/{}", class_path(class), object_id)
}

pub fn file_path(name: &str) -> String {
    format!("files/{}", name)
}

/// The `{"results": ...}` wrapper around list responses.
///
/// The contents stay undecoded until the envelope itself has been accepted.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub results: Box<serde_json::value::RawValue>,
}
