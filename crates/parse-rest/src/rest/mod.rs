//! REST transport.
//!
//! This module performs single request/response round trips against the
//! service and classifies failures through the core error catalog.

mod client;
mod endpoints;

pub(crate) use client::{Request, RestClient, transport_error};
pub(crate) use endpoints::*;
