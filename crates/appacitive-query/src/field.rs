//! Field references.

use std::fmt;

use crate::error::{QueryError, QueryResult};

/// Characters that would make a rendered expression ambiguous.
const RESERVED: [char; 8] = [',', '(', ')', '\'', '=', '!', '<', '>'];

/// A named reference to an entity attribute or system property.
///
/// The name is rendered as a bare identifier. Dotted paths (`address.city`)
/// and system properties (`__id`, `__createdby`) are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field(String);

impl Field {
    /// Create a field reference.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] if the name is empty or contains
    /// whitespace, control characters, an operator character (`=`, `!`, `<`,
    /// `>`) or one of `,`, `(`, `)` and `'`.
    pub fn new(name: impl Into<String>) -> QueryResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(QueryError::invalid("field", "field name must not be empty"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || RESERVED.contains(c))
        {
            return Err(QueryError::invalid(
                "field",
                format!("field name '{name}' contains reserved character {c:?}"),
            ));
        }
        Ok(Self(name))
    }

    /// The field name, unmodified.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Field {
    type Error = QueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Field {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
