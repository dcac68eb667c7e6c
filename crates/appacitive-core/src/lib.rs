//! Core types and configuration shared by the Appacitive SDK crates.
//!
//! This crate provides the SDK-wide configuration, the core error type, and
//! the validated identifier types that the request-building crates depend on.

mod config;
mod error;
mod types;

pub use config::SdkConfig;
pub use error::{SdkError, SdkResult};
pub use types::{Environment, SchemaName};
