//! Typed literal values used as filter operands.
//!
//! A [`FieldValue`] is immutable and renders to one canonical text form:
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | string | single-quoted; `\` and `'` are escaped with a backslash |
//! | integer, long | plain decimal |
//! | double | shortest decimal that round-trips, never exponential |
//! | boolean | `true` / `false` |
//! | timestamp | UTC `YYYY-MM-DDTHH:MM:SS.fffffffZ` |
//!
//! Quoting strings keeps them distinct from numbers and booleans with the same
//! spelling (`'5'` versus `5`), and lets them carry `,`, `(` and `)` safely.

use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{QueryError, QueryResult};

/// Kind tag of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Finite 64-bit float.
    Double,
    /// Boolean.
    Boolean,
    /// Absolute point in time.
    Timestamp,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Long => write!(f, "long"),
            Self::Double => write!(f, "double"),
            Self::Boolean => write!(f, "boolean"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// An immutable, typed filter literal.
///
/// Equality compares the kind and the underlying value, so `integer(5)` and
/// `long(5)` are different values.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue(Literal);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    String(String),
    Integer(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// A string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self(Literal::String(value.into()))
    }

    /// A 32-bit integer literal.
    #[must_use]
    pub fn integer(value: i32) -> Self {
        Self(Literal::Integer(value))
    }

    /// A 64-bit integer literal.
    #[must_use]
    pub fn long(value: i64) -> Self {
        Self(Literal::Long(value))
    }

    /// A floating point literal.
    ///
    /// Negative zero is stored as zero so that equal values render identically.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] for NaN and infinities, which
    /// have no decimal rendering.
    pub fn double(value: f64) -> QueryResult<Self> {
        if !value.is_finite() {
            return Err(QueryError::invalid(
                "value",
                format!("double literal must be finite, got {value}"),
            ));
        }
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self(Literal::Double(value)))
    }

    /// A boolean literal.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self(Literal::Boolean(value))
    }

    /// A timestamp literal. The instant is normalized to UTC.
    #[must_use]
    pub fn timestamp<Tz: TimeZone>(value: DateTime<Tz>) -> Self {
        Self(Literal::Timestamp(value.with_timezone(&Utc)))
    }

    /// The kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match &self.0 {
            Literal::String(_) => ValueKind::String,
            Literal::Integer(_) => ValueKind::Integer,
            Literal::Long(_) => ValueKind::Long,
            Literal::Double(_) => ValueKind::Double,
            Literal::Boolean(_) => ValueKind::Boolean,
            Literal::Timestamp(_) => ValueKind::Timestamp,
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is an integer or long value.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match &self.0 {
            Literal::Integer(n) => Some(i64::from(*n)),
            Literal::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number if this is a double value.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Literal::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match &self.0 {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the instant if this is a timestamp value.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match &self.0 {
            Literal::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    pub(crate) fn literal(&self) -> &Literal {
        &self.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Literal::String(s) => write_quoted(f, s),
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Long(n) => write!(f, "{n}"),
            // `Display` for f64 never switches to exponential notation.
            Literal::Double(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Timestamp(t) => write_timestamp(f, t),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('\'')?;
    for c in s.chars() {
        if matches!(c, '\\' | '\'') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('\'')
}

fn write_timestamp(f: &mut fmt::Formatter<'_>, t: &DateTime<Utc>) -> fmt::Result {
    // Leap-second instants carry nanos >= 1e9; clamp to keep seven digits.
    let ticks = t.timestamp_subsec_nanos().min(999_999_999) / 100;
    write!(f, "{}.{ticks:07}Z", t.format("%Y-%m-%dT%H:%M:%S"))
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::integer(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::long(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::timestamp(value)
    }
}

impl TryFrom<f64> for FieldValue {
    type Error = QueryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::double(value)
    }
}

/// Conversion of a raw literal into a [`FieldValue`].
///
/// Implemented once per supported literal type so that the fluent builder and
/// the membership constructors pick the value kind statically. Untyped integer
/// literals default to `i32` and therefore to [`ValueKind::Integer`].
pub trait IntoFieldValue {
    /// Wrap `self` as a typed literal.
    fn into_field_value(self) -> QueryResult<FieldValue>;
}

impl IntoFieldValue for FieldValue {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(self)
    }
}

impl IntoFieldValue for &FieldValue {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(self.clone())
    }
}

impl IntoFieldValue for &str {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::string(self))
    }
}

impl IntoFieldValue for String {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::string(self))
    }
}

impl IntoFieldValue for &String {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::string(self.as_str()))
    }
}

impl IntoFieldValue for i32 {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::integer(self))
    }
}

impl IntoFieldValue for i64 {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::long(self))
    }
}

impl IntoFieldValue for f64 {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        FieldValue::double(self)
    }
}

impl IntoFieldValue for bool {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::boolean(self))
    }
}

impl<Tz: TimeZone> IntoFieldValue for DateTime<Tz> {
    fn into_field_value(self) -> QueryResult<FieldValue> {
        Ok(FieldValue::timestamp(self))
    }
}

#[cfg(test)]
pub(crate) fn unescape(rendered: &str) -> Option<String> {
    let body = rendered.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '\'' => return None,
            other => out.push(other),
        }
    }
    Some(out)
}
