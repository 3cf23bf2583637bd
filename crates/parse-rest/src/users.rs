//! Sign-up, login and user deletion.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use parse_core::{Object, Result, SignUpResponse, User};

use crate::client::Client;
use crate::rest::{CURRENT_USER, LOGIN, Request, USERS};

impl Client {
    /// Sign up a new user.
    ///
    /// `user` must at least carry a username and password. The assigned id
    /// and creation time are recorded on it; the session token for the new
    /// user is in the response.
    #[instrument(skip(self, user))]
    pub async fn create_user<U: Object>(&self, user: &mut U) -> Result<SignUpResponse> {
        debug!("Signing up user");
        let response: SignUpResponse = self
            .rest
            .call_json(Request::post("CreateUser", USERS).json(&*user)?)
            .await?;

        let meta = user.meta_mut();
        meta.object_id = Some(response.object_id.clone());
        meta.created_at = Some(response.created_at);
        meta.updated_at = Some(response.created_at);
        Ok(response)
    }

    /// Log in and return the user record, including its session token.
    ///
    /// Pass [`User`] for `U` unless the user class has custom fields.
    #[instrument(skip(self, password))]
    pub async fn login_user<U: DeserializeOwned>(&self, username: &str, password: &str) -> Result<U> {
        debug!("Logging in");
        let params = vec![
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];
        self.rest
            .call_json(Request::get("LoginUser", LOGIN).query(params))
            .await
    }

    /// The user the attached session token belongs to.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        self.rest
            .call_json(Request::get("CurrentUser", CURRENT_USER))
            .await
    }

    /// Delete a user. Needs the user's session token or the master key.
    pub async fn delete_user<U: Object>(&self, user: &U) -> Result<()> {
        self.delete(user).await
    }
}
