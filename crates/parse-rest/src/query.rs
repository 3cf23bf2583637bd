//! Class queries.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use parse_core::error::DecodeError;
use parse_core::{ClassName, Object, QueryOptions, Result, class_name_for, class_name_of_slice};

use crate::client::Client;
use crate::rest::{Envelope, Request, class_path};

impl Client {
    /// Query a class by name and decode the results into `D`.
    ///
    /// `D` is typically `Vec<T>` for some record type, or
    /// `Vec<serde_json::Value>` for schemaless access.
    ///
    /// # Errors
    ///
    /// A response without a `results` envelope fails with
    /// [`DecodeError::Envelope`]; results that do not fit `D` fail with
    /// [`DecodeError::Payload`].
    #[instrument(skip(self, options))]
    pub async fn query_class<D>(&self, class: &ClassName, options: Option<&QueryOptions>) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let params = options.map(QueryOptions::to_params).unwrap_or_default();
        debug!(params = params.len(), "Querying class");

        let raw = self
            .rest
            .call(Request::get("Query", class_path(class)).query(params))
            .await?;

        decode_results(&raw.body)
    }

    /// Query the class `T` is stored in.
    #[instrument(skip(self, options))]
    pub async fn query<T: Object>(&self, options: Option<&QueryOptions>) -> Result<Vec<T>> {
        let class = class_name_for::<T>()?;
        self.query_class(&class, options).await
    }

    /// Query the class of `destination`'s element type and replace its
    /// contents with the results.
    ///
    /// The class is resolved from the element type alone, so an empty
    /// destination works. On error `destination` is left unchanged.
    #[instrument(skip(self, options, destination))]
    pub async fn query_into<T: Object>(
        &self,
        options: Option<&QueryOptions>,
        destination: &mut Vec<T>,
    ) -> Result<()> {
        let class = class_name_of_slice(destination.as_slice())?;
        *destination = self.query_class(&class, options).await?;
        Ok(())
    }
}

/// Decode a query response in two steps: the envelope, then its contents.
pub(crate) fn decode_results<D: DeserializeOwned>(body: &[u8]) -> Result<D> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| DecodeError::envelope(&e))?;
    trace!("results envelope accepted");
    serde_json::from_str(envelope.results.get()).map_err(|e| DecodeError::payload(&e).into())
}
