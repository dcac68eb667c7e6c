//! Serde and string conversions at the boundary of the DSL.
//!
//! A [`Query`] serializes as its rendered text, which is how it travels inside
//! JSON request bodies. The reverse direction does not exist: parsing or
//! deserializing a query always fails with an unsupported-operation error.

use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::QueryError;
use crate::query::Query;
use crate::value::{FieldValue, Literal};

const PARSE_QUERY: &str = "parsing a query from its rendered text";

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(de::Error::custom(QueryError::UnsupportedOperation {
            operation: PARSE_QUERY,
        }))
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(_s: &str) -> Result<Self, Self::Err> {
        Err(QueryError::UnsupportedOperation {
            operation: PARSE_QUERY,
        })
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.literal() {
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Integer(n) => serializer.serialize_i32(*n),
            Literal::Long(n) => serializer.serialize_i64(*n),
            Literal::Double(n) => serializer.serialize_f64(*n),
            Literal::Boolean(b) => serializer.serialize_bool(*b),
            // Same seven-digit UTC form the filter text uses.
            Literal::Timestamp(_) => serializer.collect_str(self),
        }
    }
}
