//! Fluent construction of query trees.
//!
//! The builder is a thin layer over the node constructors in [`crate::query`]:
//! it converts raw literals to [`FieldValue`]s and forwards to the validating
//! constructors, adding no rules of its own.
//!
//! ```
//! use appacitive_query::field;
//!
//! let adults_outside_ny = field("age")?
//!     .greater_than(17)?
//!     .and(field("city")?.equal_to("NY")?.negate());
//! assert_eq!(
//!     adults_outside_ny.render(),
//!     "(age > 17) and (not (city = 'NY'))"
//! );
//! # Ok::<(), appacitive_query::QueryError>(())
//! ```

use crate::error::QueryResult;
use crate::field::Field;
use crate::query::{CompareOp, Logical, LogicalMode, MembershipMode, Query};
use crate::value::{FieldValue, IntoFieldValue};

/// Start a fluent expression on the named field.
pub fn field(name: impl Into<String>) -> QueryResult<Field> {
    Field::new(name)
}

impl Field {
    fn compare(self, op: CompareOp, value: impl IntoFieldValue) -> QueryResult<Query> {
        Ok(Query::comparison(self, op, value.into_field_value()?))
    }

    fn membership<V: IntoFieldValue>(
        self,
        mode: MembershipMode,
        values: impl IntoIterator<Item = V>,
    ) -> QueryResult<Query> {
        let values = values
            .into_iter()
            .map(IntoFieldValue::into_field_value)
            .collect::<QueryResult<Vec<FieldValue>>>()?;
        Query::membership(self, mode, values)
    }

    /// `field = value`
    pub fn equal_to(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Eq, value)
    }

    /// `field != value`
    pub fn not_equal_to(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Ne, value)
    }

    /// `field > value`
    pub fn greater_than(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Gt, value)
    }

    /// `field >= value`
    pub fn greater_than_or_equal_to(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Ge, value)
    }

    /// `field < value`
    pub fn less_than(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Lt, value)
    }

    /// `field <= value`
    pub fn less_than_or_equal_to(self, value: impl IntoFieldValue) -> QueryResult<Query> {
        self.compare(CompareOp::Le, value)
    }

    /// `field between low,high`; both bounds must convert to the same kind.
    pub fn between(
        self,
        low: impl IntoFieldValue,
        high: impl IntoFieldValue,
    ) -> QueryResult<Query> {
        Query::range(self, low.into_field_value()?, high.into_field_value()?)
    }

    /// `field in v1,v2,...`
    pub fn is_in<V: IntoFieldValue>(
        self,
        values: impl IntoIterator<Item = V>,
    ) -> QueryResult<Query> {
        self.membership(MembershipMode::In, values)
    }

    /// `field not in v1,v2,...`
    pub fn not_in<V: IntoFieldValue>(
        self,
        values: impl IntoIterator<Item = V>,
    ) -> QueryResult<Query> {
        self.membership(MembershipMode::NotIn, values)
    }
}

impl Query {
    /// `(self) and (other)`
    #[must_use]
    pub fn and(self, other: Query) -> Query {
        Self::pair(LogicalMode::And, self, other)
    }

    /// `(self) or (other)`
    #[must_use]
    pub fn or(self, other: Query) -> Query {
        Self::pair(LogicalMode::Or, self, other)
    }

    /// `not (self)`
    #[must_use]
    pub fn negate(self) -> Query {
        Query::Logical(Logical::unary_not(self))
    }

    /// Conjunction of all `queries`; needs at least two.
    pub fn all(queries: impl IntoIterator<Item = Query>) -> QueryResult<Query> {
        Query::logical(LogicalMode::And, queries)
    }

    /// Disjunction of all `queries`; needs at least two.
    pub fn any(queries: impl IntoIterator<Item = Query>) -> QueryResult<Query> {
        Query::logical(LogicalMode::Or, queries)
    }

    fn pair(mode: LogicalMode, left: Query, right: Query) -> Query {
        Query::Logical(Logical::binary(mode, left, right))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_should_build_comparison() {
        let q = field("age").unwrap().greater_than_or_equal_to(18).unwrap();
        assert_eq!(q.render(), "age >= 18");
    }

    #[test]
    fn test_should_build_every_comparison() {
        let f = || field("n").unwrap();
        assert_eq!(f().equal_to(1).unwrap().render(), "n = 1");
        assert_eq!(f().not_equal_to(1).unwrap().render(), "n != 1");
        assert_eq!(f().greater_than(1).unwrap().render(), "n > 1");
        assert_eq!(f().greater_than_or_equal_to(1).unwrap().render(), "n >= 1");
        assert_eq!(f().less_than(1).unwrap().render(), "n < 1");
        assert_eq!(f().less_than_or_equal_to(1).unwrap().render(), "n <= 1");
    }

    #[test]
    fn test_should_pick_value_kind_from_literal_type() {
        assert_eq!(field("a").unwrap().equal_to("x").unwrap().render(), "a = 'x'");
        assert_eq!(field("a").unwrap().equal_to(true).unwrap().render(), "a = true");
        assert_eq!(field("a").unwrap().equal_to(1.25).unwrap().render(), "a = 1.25");
        assert_eq!(
            field("a").unwrap().equal_to(5_000_000_000_i64).unwrap().render(),
            "a = 5000000000"
        );
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            field("__utcdatecreated").unwrap().less_than(at).unwrap().render(),
            "__utcdatecreated < 2023-12-31T23:59:59.0000000Z"
        );
    }

    #[test]
    fn test_should_build_range() {
        let q = field("score").unwrap().between(1.5, 9.5).unwrap();
        assert_eq!(q.render(), "score between 1.5,9.5");
        assert!(field("score").unwrap().between(1, "9").is_err());
    }

    #[test]
    fn test_should_build_membership() {
        let q = field("city").unwrap().is_in(["NY", "LA"]).unwrap();
        assert_eq!(q.render(), "city in 'NY','LA'");

        let q = field("f").unwrap().not_in([4_i64, 4, 2]).unwrap();
        assert_eq!(q.render(), "f not in 4,4,2");
    }

    #[test]
    fn test_should_propagate_membership_errors() {
        assert!(field("f").unwrap().is_in(Vec::<i32>::new()).is_err());
        assert!(field("f").unwrap().is_in([1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_should_compose_fluently() {
        let q = field("age")
            .unwrap()
            .greater_than(18)
            .unwrap()
            .and(field("city").unwrap().equal_to("NY").unwrap());
        assert_eq!(q.render(), "(age > 18) and (city = 'NY')");
    }

    #[test]
    fn test_should_nest_chained_combinators() {
        let a = field("a").unwrap().equal_to(1).unwrap();
        let b = field("b").unwrap().equal_to(2).unwrap();
        let c = field("c").unwrap().equal_to(3).unwrap();
        assert_eq!(a.or(b).and(c).render(), "((a = 1) or (b = 2)) and (c = 3)");
    }

    #[test]
    fn test_should_negate() {
        let q = field("status").unwrap().equal_to("active").unwrap().negate();
        assert_eq!(q.render(), "not (status = 'active')");
        assert_eq!(q.clone().negate().render(), "not (not (status = 'active'))");
    }

    #[test]
    fn test_should_build_all_and_any() {
        let leaves = || {
            vec![
                field("a").unwrap().equal_to(1).unwrap(),
                field("b").unwrap().equal_to(2).unwrap(),
                field("c").unwrap().equal_to(3).unwrap(),
            ]
        };
        assert_eq!(
            Query::all(leaves()).unwrap().render(),
            "(a = 1) and (b = 2) and (c = 3)"
        );
        assert_eq!(
            Query::any(leaves()).unwrap().render(),
            "(a = 1) or (b = 2) or (c = 3)"
        );
        assert!(Query::all(leaves().into_iter().take(1)).is_err());
    }

    #[test]
    fn test_should_reject_invalid_field_name() {
        assert!(field("").is_err());
    }
}
