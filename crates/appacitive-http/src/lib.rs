//! Request building for the platform's filter-capable endpoints.
//!
//! This crate sits at the boundary between the query DSL and the transport:
//! it renders a [`appacitive_query::Query`] once, places it in the `query`
//! query-string parameter next to paging and sorting options, and produces a
//! URL or a bodiless [`http::Request`]. Sending the request, authentication,
//! and response parsing belong to the transport layer.

pub mod error;
pub mod find;

pub use error::{RequestError, RequestResult};
pub use find::FindRequest;
