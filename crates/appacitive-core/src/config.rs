//! SDK configuration.
//!
//! Provides [`SdkConfig`], the settings shared by every request the SDK builds.
//! Values are loaded from environment variables, falling back to defaults that
//! target the public API in the sandbox environment.

use serde::{Deserialize, Serialize};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::types::Environment;

/// Default API root.
const DEFAULT_BASE_URL: &str = "https://apis.appacitive.com/v1.0";

/// Global configuration for the SDK.
///
/// # Examples
///
/// ```
/// use appacitive_core::{Environment, SdkConfig};
///
/// let config = SdkConfig::default();
/// assert_eq!(config.environment, Environment::Sandbox);
/// assert_eq!(config.default_page_size, 20);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    /// API root, without a trailing slash.
    #[builder(default = String::from(DEFAULT_BASE_URL))]
    pub base_url: String,

    /// Environment requests are addressed to.
    #[builder(default)]
    pub environment: Environment,

    /// Page size used when a request does not set one.
    #[builder(default = 20)]
    pub default_page_size: u32,

    /// Largest page size the platform accepts.
    #[builder(default = 200)]
    pub max_page_size: u32,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            environment: Environment::default(),
            default_page_size: 20,
            max_page_size: 200,
            log_level: String::from("info"),
        }
    }
}

impl SdkConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `APPACITIVE_BASE_URL` | `https://apis.appacitive.com/v1.0` |
    /// | `APPACITIVE_ENVIRONMENT` | `sandbox` |
    /// | `APPACITIVE_PAGE_SIZE` | `20` |
    /// | `APPACITIVE_MAX_PAGE_SIZE` | `200` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// Unparsable values, a zero page size, and a default page size above the
    /// maximum are logged and replaced by their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("APPACITIVE_BASE_URL") {
            config.base_url = v.trim_end_matches('/').to_owned();
        }
        if let Some(v) = lookup("APPACITIVE_ENVIRONMENT") {
            match v.parse() {
                Ok(env) => config.environment = env,
                Err(e) => warn!(error = %e, "ignoring APPACITIVE_ENVIRONMENT"),
            }
        }
        if let Some(n) = page_size(&lookup, "APPACITIVE_PAGE_SIZE") {
            config.default_page_size = n;
        }
        if let Some(n) = page_size(&lookup, "APPACITIVE_MAX_PAGE_SIZE") {
            config.max_page_size = n;
        }
        if config.default_page_size > config.max_page_size {
            warn!(
                default_page_size = config.default_page_size,
                max_page_size = config.max_page_size,
                "default page size exceeds maximum, restoring defaults"
            );
            let defaults = Self::default();
            config.default_page_size = defaults.default_page_size;
            config.max_page_size = defaults.max_page_size;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

fn page_size(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let v = lookup(key)?;
    match v.parse::<u32>() {
        Ok(0) => {
            warn!(key, "ignoring zero page size");
            None
        }
        Ok(n) => Some(n),
        Err(e) => {
            warn!(key, value = %v, error = %e, "ignoring non-numeric configuration value");
            None
        }
    }
}
