//! Validated identifier types.
//!
//! These types enforce the service's naming rules at construction time so
//! malformed names fail locally instead of as a round trip.

mod api_url;
mod class_name;

pub use api_url::ApiUrl;
pub use class_name::ClassName;
