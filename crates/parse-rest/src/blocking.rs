//! Blocking wrappers for callers without an async runtime.
//!
//! Each call drives the async operation to completion on a private
//! current-thread runtime. Do not use these from inside an async context;
//! tokio panics when a runtime is entered from another runtime's worker.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Runtime};

use parse_core::{ClassName, Error, Object, QueryOptions, Result};

use crate::client::Client;
use crate::iter::{ObjectIter, Step};

/// A [`Client`] whose operations block the calling thread.
pub struct BlockingClient {
    client: Client,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new(client: Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(runtime_error)?;
        Ok(Self { client, runtime })
    }

    /// The wrapped async client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn query_class<D: DeserializeOwned>(
        &self,
        class: &ClassName,
        options: Option<&QueryOptions>,
    ) -> Result<D> {
        self.runtime
            .block_on(self.client.query_class(class, options))
    }

    pub fn query<T: Object>(&self, options: Option<&QueryOptions>) -> Result<Vec<T>> {
        self.runtime.block_on(self.client.query(options))
    }

    pub fn query_into<T: Object>(
        &self,
        options: Option<&QueryOptions>,
        destination: &mut Vec<T>,
    ) -> Result<()> {
        self.runtime
            .block_on(self.client.query_into(options, destination))
    }

    pub fn create<T: Object>(&self, object: &mut T) -> Result<String> {
        self.runtime.block_on(self.client.create(object))
    }

    pub fn get<T: Object>(&self, object_id: &str) -> Result<T> {
        self.runtime.block_on(self.client.get(object_id))
    }

    pub fn update<T: Object>(&self, object: &mut T) -> Result<DateTime<Utc>> {
        self.runtime.block_on(self.client.update(object))
    }

    pub fn delete<T: Object>(&self, object: &T) -> Result<()> {
        self.runtime.block_on(self.client.delete(object))
    }

    /// Walk every record of `class`.
    pub fn iter_class<T: DeserializeOwned>(&self, class: ClassName) -> BlockingIter<'_, T> {
        BlockingIter {
            runtime: &self.runtime,
            inner: self.client.iter_class(class),
        }
    }

    /// Walk every record of the class `T` is stored in.
    pub fn iter<T: Object>(&self) -> Result<BlockingIter<'_, T>> {
        Ok(BlockingIter {
            runtime: &self.runtime,
            inner: self.client.iter()?,
        })
    }
}

/// An [`ObjectIter`] driven synchronously.
///
/// Implements [`Iterator`]: a failure is yielded once as `Some(Err(_))`,
/// after which the iterator is exhausted.
pub struct BlockingIter<'a, T> {
    runtime: &'a Runtime,
    inner: ObjectIter<T>,
}

impl<T: DeserializeOwned> BlockingIter<'_, T> {
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        self.inner = self.inner.with_page_size(page_size)?;
        Ok(self)
    }

    pub fn advance(&mut self) -> Step<T> {
        self.runtime.block_on(self.inner.advance())
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.inner.last_error()
    }
}

impl<T: DeserializeOwned> Iterator for BlockingIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.runtime.block_on(self.inner.next())
    }
}

fn runtime_error(err: std::io::Error) -> Error {
    Error::Runtime {
        message: err.to_string(),
    }
}
