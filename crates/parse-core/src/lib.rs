//! parse-core - Core types for the Parse REST API.
//!
//! This crate holds everything that does not touch the network: the error
//! catalog and classification, the [`Object`] trait that maps record types
//! to classes, query options, validated names, and credentials.

pub mod credentials;
pub mod error;
pub mod model;
pub mod query;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{Error, ServiceError, decode_error};
pub use model::{
    CreatedObject, FileRef, HookFunction, SignUpResponse, TriggerFunction, UpdatedObject, User,
};
pub use query::QueryOptions;
pub use tokens::{MasterKey, SessionToken};
pub use traits::{
    Object, ObjectMeta, TraceSink, class_name_for, class_name_of, class_name_of_slice,
    default_class_name,
};
pub use types::{ApiUrl, ClassName};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
