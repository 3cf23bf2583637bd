//! Client construction and object CRUD.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use parse_core::error::InvalidInputError;
use parse_core::{
    ApiUrl, ClassName, CreatedObject, Credentials, MasterKey, Object, Result, SessionToken,
    TraceSink, UpdatedObject, class_name_for, class_name_of,
};

use crate::rest::{Request, RestClient, class_path, object_path, transport_error};

/// Configuration for a [`Client`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use parse_core::{ApiUrl, Credentials};
/// use parse_rest::Client;
///
/// # fn example() -> Result<(), parse_core::Error> {
/// let client = Client::builder(Credentials::new("app-id", "rest-key"))
///     .server(ApiUrl::new("https://parse.example.com/parse")?)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    credentials: Credentials,
    server: ApiUrl,
    timeout: Option<Duration>,
    user_agent: String,
    master_key: Option<MasterKey>,
    session_token: Option<SessionToken>,
    trace: Option<Arc<dyn TraceSink>>,
}

impl ClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            server: ApiUrl::default(),
            timeout: None,
            user_agent: concat!("parse-rest/", env!("CARGO_PKG_VERSION")).to_string(),
            master_key: None,
            session_token: None,
            trace: None,
        }
    }

    /// Base URL of the API. Defaults to the hosted service.
    pub fn server(mut self, server: ApiUrl) -> Self {
        self.server = server;
        self
    }

    /// Per-request timeout. No timeout by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn master_key(mut self, key: MasterKey) -> Self {
        self.master_key = Some(key);
        self
    }

    pub fn session_token(mut self, token: SessionToken) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Send a copy of every request and response body to `sink`.
    pub fn trace(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut http = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(transport_error)?;

        let mut rest = RestClient::new(http, self.server, self.credentials);
        rest.set_master_key(self.master_key);
        rest.set_session_token(self.session_token);
        rest.set_trace(self.trace);

        Ok(Client { rest })
    }
}

/// Client for the Parse REST API.
///
/// Cheap to clone. Configuration is fixed at construction; the `with_*`
/// methods return a derived client and leave the original untouched.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) rest: RestClient,
}

impl Client {
    /// A client for the hosted service with default settings.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Returns the API base URL this client talks to.
    pub fn server(&self) -> &ApiUrl {
        self.rest.api()
    }

    /// Returns true if a master key is attached.
    pub fn has_master_key(&self) -> bool {
        self.rest.master_key().is_some()
    }

    /// Returns the attached session token, if any.
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.rest.session_token()
    }

    /// A client that also sends the master key.
    pub fn with_master_key(mut self, key: MasterKey) -> Self {
        self.rest.set_master_key(Some(key));
        self
    }

    /// A client acting as the user the session token belongs to.
    pub fn with_session_token(mut self, token: SessionToken) -> Self {
        self.rest.set_session_token(Some(token));
        self
    }

    /// A client that traces to `sink`.
    pub fn with_trace(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.rest.set_trace(Some(sink));
        self
    }

    /// Save a new object and record the assigned id and creation time on it.
    #[instrument(skip(self, object))]
    pub async fn create<T: Object>(&self, object: &mut T) -> Result<String> {
        let class = class_name_of(object)?;
        debug!(%class, "Creating object");

        let created: CreatedObject = self
            .rest
            .call_json(Request::post("Create", class_path(&class)).json(&*object)?)
            .await?;

        let meta = object.meta_mut();
        meta.object_id = Some(created.object_id.clone());
        meta.created_at = Some(created.created_at);
        meta.updated_at = Some(created.created_at);
        Ok(created.object_id)
    }

    /// Fetch one object by id.
    #[instrument(skip(self))]
    pub async fn get<T: Object>(&self, object_id: &str) -> Result<T> {
        let class = class_name_for::<T>()?;
        self.get_class(&class, object_id).await
    }

    /// Fetch one object by id from an explicitly named class.
    #[instrument(skip(self))]
    pub async fn get_class<T>(&self, class: &ClassName, object_id: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("Getting object");
        self.rest
            .call_json(Request::get("Get", object_path(class, object_id)))
            .await
    }

    /// Write the object's fields and record the new update time on it.
    ///
    /// Fails locally with [`InvalidInputError::MissingObjectId`] if the
    /// object has never been saved.
    #[instrument(skip(self, object))]
    pub async fn update<T: Object>(&self, object: &mut T) -> Result<DateTime<Utc>> {
        let class = class_name_of(object)?;
        let object_id = saved_id(object)?.to_string();
        debug!(%class, %object_id, "Updating object");

        let updated: UpdatedObject = self
            .rest
            .call_json(Request::put("Update", object_path(&class, &object_id)).json(&*object)?)
            .await?;

        object.meta_mut().updated_at = Some(updated.updated_at);
        Ok(updated.updated_at)
    }

    /// Delete a saved object.
    #[instrument(skip(self, object))]
    pub async fn delete<T: Object>(&self, object: &T) -> Result<()> {
        let class = class_name_of(object)?;
        let object_id = saved_id(object)?;
        debug!(%class, %object_id, "Deleting object");

        self.rest
            .call(Request::delete("Delete", object_path(&class, object_id)))
            .await?;
        Ok(())
    }
}

fn saved_id<T: Object>(object: &T) -> Result<&str> {
    object
        .object_id()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| InvalidInputError::MissingObjectId.into())
}
