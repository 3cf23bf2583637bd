//! HTTP round trips against the REST API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use parse_core::error::{DecodeError, InvalidInputError, TransportError};
use parse_core::{ApiUrl, Credentials, Error, MasterKey, Result, SessionToken, TraceSink};

use super::endpoints::{
    APPLICATION_ID_HEADER, MASTER_KEY_HEADER, REST_API_KEY_HEADER, SESSION_TOKEN_HEADER,
};

/// Undecoded body of a successful response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Decode the body as a plain JSON document.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R> {
        serde_json::from_slice(&self.body).map_err(|e| DecodeError::body(&e).into())
    }
}

/// Request body with its content type.
#[derive(Debug)]
pub(crate) enum Body {
    Json(Vec<u8>),
    Raw { bytes: Vec<u8>, content_type: String },
}

/// One request: method, endpoint path, query parameters and optional body.
#[derive(Debug)]
pub(crate) struct Request {
    operation: &'static str,
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Body>,
}

impl Request {
    pub fn new(operation: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, Method::GET, path)
    }

    pub fn post(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, Method::POST, path)
    }

    pub fn put(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, Method::PUT, path)
    }

    pub fn delete(operation: &'static str, path: impl Into<String>) -> Self {
        Self::new(operation, Method::DELETE, path)
    }

    pub fn query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query = params;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| InvalidInputError::Other {
            message: format!("request body cannot be serialized: {}", e),
        })?;
        self.body = Some(Body::Json(bytes));
        Ok(self)
    }

    pub fn raw(mut self, bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.body = Some(Body::Raw {
            bytes,
            content_type: content_type.into(),
        });
        self
    }
}

/// HTTP client for the REST API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    api: ApiUrl,
    credentials: Credentials,
    master_key: Option<MasterKey>,
    session_token: Option<SessionToken>,
    trace: Option<Arc<dyn TraceSink>>,
}

impl RestClient {
    pub fn new(http: reqwest::Client, api: ApiUrl, credentials: Credentials) -> Self {
        Self {
            http,
            api,
            credentials,
            master_key: None,
            session_token: None,
            trace: None,
        }
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    pub fn master_key(&self) -> Option<&MasterKey> {
        self.master_key.as_ref()
    }

    pub fn session_token(&self) -> Option<&SessionToken> {
        self.session_token.as_ref()
    }

    pub fn set_master_key(&mut self, key: Option<MasterKey>) {
        self.master_key = key;
    }

    pub fn set_session_token(&mut self, token: Option<SessionToken>) {
        self.session_token = token;
    }

    pub fn set_trace(&mut self, sink: Option<Arc<dyn TraceSink>>) {
        self.trace = sink;
    }

    /// Perform one round trip.
    ///
    /// Non-success statuses are classified with [`parse_core::decode_error`];
    /// an empty error body counts as absent.
    #[instrument(skip_all, fields(op = request.operation, method = %request.method, path = %request.path))]
    pub async fn call(&self, request: Request) -> Result<RawResponse> {
        let url = self.api.endpoint(&request.path);
        debug!("REST call");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(self.headers()?);

        if !request.query.is_empty() {
            trace!(params = ?request.query, "query parameters");
            builder = builder.query(&request.query);
        }

        match request.body {
            Some(Body::Json(bytes)) => {
                self.trace(request.operation, ">", &request.path, &bytes);
                builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
            }
            Some(Body::Raw {
                bytes,
                content_type,
            }) => {
                trace!(len = bytes.len(), %content_type, "raw request body");
                builder = builder.header(CONTENT_TYPE, content_type).body(bytes);
            }
            None => {}
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();
        trace!(status = %status, len = body.len(), "REST response");
        self.trace(request.operation, "<", &request.path, &body);

        if status.is_success() {
            Ok(RawResponse { body })
        } else {
            let body = (!body.is_empty()).then_some(body.as_slice());
            let error = parse_core::decode_error(body);
            debug!(status = %status, %error, "REST call failed");
            Err(error)
        }
    }

    /// Perform a round trip and decode the body as JSON.
    pub async fn call_json<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
        self.call(request).await?.json()
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        insert_header(
            &mut headers,
            APPLICATION_ID_HEADER,
            self.credentials.application_id(),
        )?;
        insert_header(
            &mut headers,
            REST_API_KEY_HEADER,
            self.credentials.rest_api_key(),
        )?;
        if let Some(token) = &self.session_token {
            insert_header(&mut headers, SESSION_TOKEN_HEADER, token.as_str())?;
        }
        if let Some(key) = &self.master_key {
            insert_header(&mut headers, MASTER_KEY_HEADER, key.as_str())?;
        }
        Ok(headers)
    }

    fn trace(&self, operation: &str, direction: &str, path: &str, payload: &[u8]) {
        if let Some(sink) = &self.trace {
            let payload = String::from_utf8_lossy(payload);
            sink.trace(&format!("{} {}", operation, direction), path, &payload);
        }
    }
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|_| InvalidInputError::Other {
        message: format!("{} contains characters not allowed in a header", name),
    })?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Map a reqwest failure onto the transport error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("api", &self.api)
            .field("credentials", &self.credentials)
            .field("master_key", &self.master_key)
            .field("session_token", &self.session_token)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
