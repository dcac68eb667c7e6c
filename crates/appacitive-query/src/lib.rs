//! Typed filter expression DSL for the Appacitive SDK.
//!
//! Callers build a [`Query`] tree from [`Field`] references and typed
//! [`FieldValue`] literals, compose it with logical combinators, and render it
//! into the textual filter grammar accepted by the platform's find endpoints:
//!
//! ```text
//! expr        := comparison | range | membership | logical
//! comparison  := field operator value
//! range       := field "between" value "," value
//! membership  := field ("in" | "not in") value ("," value)*
//! logical     := "(" expr ")" (("and"|"or") "(" expr ")")*  |  "not" "(" expr ")"
//! operator    := "=" | "!=" | ">" | ">=" | "<" | "<="
//! ```
//!
//! Every invariant is checked when a node is constructed, so rendering is
//! infallible. The grammar is write-only: a rendered string cannot be turned
//! back into a [`Query`].
//!
//! # Examples
//!
//! ```
//! use appacitive_query::field;
//!
//! let query = field("age")?
//!     .greater_than_or_equal_to(18)?
//!     .and(field("city")?.is_in(["NY", "LA"])?);
//! assert_eq!(query.render(), "(age >= 18) and (city in 'NY','LA')");
//! # Ok::<(), appacitive_query::QueryError>(())
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod query;
pub mod value;
mod wire;

pub use builder::field;
pub use error::{QueryError, QueryResult};
pub use field::Field;
pub use query::{
    CompareOp, Comparison, Logical, LogicalMode, Membership, MembershipMode, Query, Range,
};
pub use value::{FieldValue, IntoFieldValue, ValueKind};
