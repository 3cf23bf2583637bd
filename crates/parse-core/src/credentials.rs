//! Application credentials type.

use std::fmt;

/// The application identity every request carries.
///
/// Holds the application id and REST API key sent as
/// `X-Parse-Application-Id` and `X-Parse-REST-API-Key`.
///
/// # Security
///
/// The API key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use parse_core::Credentials;
///
/// let creds = Credentials::new("my-app-id", "my-rest-key");
/// assert_eq!(creds.application_id(), "my-app-id");
/// assert!(!format!("{:?}", creds).contains("my-rest-key"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    application_id: String,
    rest_api_key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(application_id: impl Into<String>, rest_api_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            rest_api_key: rest_api_key.into(),
        }
    }

    /// Returns the application id.
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Returns the REST API key.
    ///
    /// # Security
    ///
    /// Use this only when constructing request headers.
    /// Never log or display this value.
    pub fn rest_api_key(&self) -> &str {
        &self.rest_api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("application_id", &self.application_id)
            .field("rest_api_key", &"[REDACTED]")
            .finish()
    }
}
