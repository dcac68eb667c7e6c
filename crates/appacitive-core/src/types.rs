//! Identifier types shared across the SDK.

use std::fmt;
use std::str::FromStr;

use crate::SdkError;

/// Name of a schema (object type) on the platform, e.g. `user` or `order_item`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SchemaName(String);

impl SchemaName {
    /// Create a new schema name.
    ///
    /// # Errors
    /// Returns an error if the name is empty or contains characters other than
    /// ASCII alphanumerics and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, SdkError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SdkError::InvalidSchemaName(name));
        }
        Ok(Self(name))
    }

    /// Get the schema name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deployment environment a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment.
    #[default]
    Sandbox,
    /// Production environment.
    Live,
}

impl Environment {
    /// Lowercase wire name of the environment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sandbox") {
            Ok(Self::Sandbox)
        } else if s.eq_ignore_ascii_case("live") {
            Ok(Self::Live)
        } else {
            Err(SdkError::UnknownEnvironment(s.to_owned()))
        }
    }
}
