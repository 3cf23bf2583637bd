//! The built-in user class.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tokens::SessionToken;
use crate::traits::{Object, ObjectMeta};

/// A row of the `_User` class.
///
/// Custom user types can embed this with `#[serde(flatten)]` to add their
/// own fields.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub meta: ObjectMeta,

    pub username: String,

    /// Only ever sent; the service never returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Present on sign-up and login responses.
    #[serde(default, skip_serializing)]
    pub session_token: Option<SessionToken>,
}

impl User {
    /// A new, unsaved user.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            ..Self::default()
        }
    }
}

impl Object for User {
    fn class_name() -> Cow<'static, str> {
        Cow::Borrowed("_User")
    }

    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("meta", &self.meta)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email)
            .field("session_token", &self.session_token)
            .finish()
    }
}

/// Response to signing up a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub object_id: String,
    pub created_at: DateTime<Utc>,
    pub session_token: SessionToken,
}
