//! Walking a whole class in creation order.
//!
//! [`ObjectIter`] pages through a class with `createdAt > cursor` queries,
//! advancing the cursor to the creation time of each record it hands out.
//! Unlike `skip`-based paging this stays correct when records are deleted
//! mid-walk, and never re-fetches a record already yielded as long as the
//! service assigns distinct, increasing creation times.
//!
//! # Example
//!
//! ```no_run
//! use parse_core::{ClassName, Credentials};
//! use parse_rest::{Client, Step};
//!
//! # async fn example() -> Result<(), parse_core::Error> {
//! let client = Client::new(Credentials::new("app-id", "rest-key"))?;
//! let mut iter = client.iter_class::<serde_json::Value>(ClassName::new("GameScore")?);
//!
//! loop {
//!     match iter.advance().await {
//!         Step::Item(record) => println!("{}", record),
//!         Step::End => break,
//!         Step::Failed(err) => return Err(err),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use chrono::DateTime;
use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use parse_core::error::{DecodeError, InvalidInputError};
use parse_core::{ClassName, Error, Object, QueryOptions, Result, class_name_for};

use crate::client::Client;

/// Records fetched per request unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Cursor value before anything has been yielded.
const ZERO_TIME: &str = "0000-00-00T00:00:00.000Z";

/// Outcome of one [`ObjectIter::advance`] call.
#[derive(Debug)]
pub enum Step<T> {
    /// The next record.
    Item(T),
    /// The class has been walked completely.
    End,
    /// Iteration halted; the same error is available from
    /// [`ObjectIter::last_error`].
    Failed(Error),
}

enum State {
    /// No buffered records; the next advance queries for a page.
    Fetching,
    /// Records of the current page not yet handed out.
    Yielding(std::vec::IntoIter<Value>),
    /// An empty page came back. Permanent.
    Finished,
    /// A fetch or record failed. Permanent.
    Halted(Error),
}

/// Pull-based cursor over every record of a class.
///
/// Create a new iterator to start over; a finished or halted one stays that
/// way.
pub struct ObjectIter<T = Value> {
    client: Client,
    class: ClassName,
    page_size: u32,
    cursor: Option<String>,
    state: State,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ObjectIter<T> {
    pub fn new(client: Client, class: ClassName) -> Self {
        Self {
            client,
            class,
            page_size: DEFAULT_PAGE_SIZE,
            cursor: None,
            state: State::Fetching,
            _record: PhantomData,
        }
    }

    /// Fetch `page_size` records per request instead of the default.
    ///
    /// # Errors
    ///
    /// Zero is rejected.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(InvalidInputError::Other {
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// The class being walked.
    pub fn class(&self) -> &ClassName {
        &self.class
    }

    /// Creation time of the last record yielded, exactly as the service
    /// sent it.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Hand out the next record, fetching a page first if needed.
    #[instrument(skip(self), fields(class = %self.class))]
    pub async fn advance(&mut self) -> Step<T> {
        loop {
            // Leave Fetching in place while awaiting so a dropped future can
            // be retried.
            match std::mem::replace(&mut self.state, State::Fetching) {
                State::Finished => {
                    self.state = State::Finished;
                    return Step::End;
                }
                State::Halted(err) => {
                    self.state = State::Halted(err.clone());
                    return Step::Failed(err);
                }
                State::Fetching => match self.fetch_page().await {
                    Ok(page) if page.is_empty() => {
                        debug!("Iteration finished");
                        self.state = State::Finished;
                        return Step::End;
                    }
                    Ok(page) => {
                        trace!(records = page.len(), "page fetched");
                        self.state = State::Yielding(page.into_iter());
                    }
                    Err(err) => return self.halt(err),
                },
                State::Yielding(mut page) => {
                    let Some(raw) = page.next() else {
                        continue;
                    };
                    match self.accept(raw) {
                        Ok(record) => {
                            if page.len() > 0 {
                                self.state = State::Yielding(page);
                            }
                            return Step::Item(record);
                        }
                        Err(err) => return self.halt(err),
                    }
                }
            }
        }
    }

    /// The error that halted iteration, if any.
    ///
    /// `None` after [`Step::End`] means the class was walked completely.
    pub fn last_error(&self) -> Option<&Error> {
        match &self.state {
            State::Halted(err) => Some(err),
            _ => None,
        }
    }

    /// [`advance`](Self::advance) as an `Option`, reporting a failure once
    /// and `None` after it.
    pub async fn next(&mut self) -> Option<Result<T>> {
        if matches!(self.state, State::Halted(_)) {
            return None;
        }
        match self.advance().await {
            Step::Item(record) => Some(Ok(record)),
            Step::End => None,
            Step::Failed(err) => Some(Err(err)),
        }
    }

    /// Adapt into a stream of records that ends after the first error.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<T>> + Send
    where
        T: Send + 'static,
    {
        async_stream::stream! {
            while let Some(record) = self.next().await {
                yield record;
            }
        }
    }

    async fn fetch_page(&self) -> Result<Vec<Value>> {
        let options = QueryOptions::new()
            .filter(created_after(self.cursor.as_deref()))
            .limit(self.page_size)
            .order("createdAt");
        self.client.query_class(&self.class, Some(&options)).await
    }

    /// Validate a fetched record, move the cursor past it and decode it.
    ///
    /// The cursor takes the service's `createdAt` text unchanged.
    fn accept(&mut self, raw: Value) -> Result<T> {
        let created_at = created_at(&raw)?.to_string();
        let record = serde_json::from_value(raw).map_err(|e| DecodeError::payload(&e))?;
        self.cursor = Some(created_at);
        Ok(record)
    }

    fn halt(&mut self, err: Error) -> Step<T> {
        debug!(error = %err, "Iteration halted");
        self.state = State::Halted(err.clone());
        Step::Failed(err)
    }
}

impl Client {
    /// Walk every record of `class`.
    pub fn iter_class<T: DeserializeOwned>(&self, class: ClassName) -> ObjectIter<T> {
        ObjectIter::new(self.clone(), class)
    }

    /// Walk every record of the class `T` is stored in.
    pub fn iter<T: Object>(&self) -> Result<ObjectIter<T>> {
        Ok(self.iter_class(class_name_for::<T>()?))
    }
}

/// `where` filter selecting records created after `cursor`.
fn created_after(cursor: Option<&str>) -> String {
    let iso = cursor.unwrap_or(ZERO_TIME);
    serde_json::json!({
        "createdAt": {"$gt": {"__type": "Date", "iso": iso}}
    })
    .to_string()
}

/// The record's `createdAt`, checked to be an RFC 3339 timestamp.
fn created_at(raw: &Value) -> Result<&str> {
    let malformed = |reason: String| -> Error { DecodeError::MalformedRecord { reason }.into() };

    let value = raw
        .get("createdAt")
        .ok_or_else(|| malformed("record has no createdAt".to_string()))?;
    let text = value
        .as_str()
        .ok_or_else(|| malformed(format!("createdAt is not a string: {}", value)))?;
    DateTime::parse_from_rfc3339(text)
        .map(|_| text)
        .map_err(|e| malformed(format!("createdAt '{}' is not a timestamp: {}", text, e)))
}
