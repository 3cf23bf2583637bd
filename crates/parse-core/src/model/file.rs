//! Stored file reference.

use serde::{Deserialize, Serialize};

/// A file stored by the service.
///
/// `name` is the service-assigned unique name (the upload name with a
/// prefix), which is what deletion needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub url: String,
}

impl FileRef {
    /// The value to store in an object field that points at this file.
    pub fn to_pointer(&self) -> serde_json::Value {
        serde_json::json!({
            "__type": "File",
            "name": self.name,
            "url": self.url,
        })
    }
}
