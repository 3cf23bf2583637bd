//! Query options and their wire encoding.

use serde::{Deserialize, Serialize};

/// Parameters to a class query.
///
/// Every field is optional on the wire: an empty `where`/`order` or a zero
/// `limit`/`skip` is left out of the request entirely rather than sent as an
/// empty value. The filter is passed through verbatim.
///
/// # Example
///
/// ```
/// use parse_core::QueryOptions;
///
/// let options = QueryOptions::new()
///     .filter(r#"{"score":{"$gte":1000}}"#)
///     .limit(10)
///     .order("-score");
///
/// let params = options.to_params();
/// assert_eq!(params.len(), 3);
/// assert!(params.contains(&("limit", "10".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Filter expression, sent as `where`.
    #[serde(rename = "where", default, skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// Maximum number of results.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,

    /// Comma-separated sort keys; a leading `-` sorts descending.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order: String,

    /// Number of results to skip.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub skip: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the filter from a JSON value.
    pub fn filter_json(self, filter: &serde_json::Value) -> Self {
        self.filter(filter.to_string())
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// The request parameters for the fields that are set.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if !self.filter.is_empty() {
            params.push(("where", self.filter.clone()));
        }
        if self.limit != 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if !self.order.is_empty() {
            params.push(("order", self.order.clone()));
        }
        if self.skip != 0 {
            params.push(("skip", self.skip.to_string()));
        }
        params
    }

    /// Rebuild options from decoded request parameters.
    ///
    /// Unrecognized keys are ignored; numeric values that do not parse are
    /// treated as unset.
    pub fn from_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "where" => options.filter = value.to_string(),
                "limit" => options.limit = value.parse().unwrap_or(0),
                "order" => options.order = value.to_string(),
                "skip" => options.skip = value.parse().unwrap_or(0),
                _ => {}
            }
        }
        options
    }
}
