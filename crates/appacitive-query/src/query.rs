//! Query expression tree.
//!
//! [`Query`] is a closed sum over four node kinds. Each kind wraps a struct with
//! private fields, so the only way to obtain one is through its validating
//! constructor; a tree that exists is a tree that renders.
//!
//! Rendering follows one rule for composition: every child of a logical node
//! is wrapped in parentheses, whatever its kind. The output therefore never
//! depends on operator precedence in the backend grammar.

use std::fmt;

use tracing::trace;

use crate::error::{QueryError, QueryResult};
use crate::field::Field;
use crate::value::{FieldValue, ValueKind};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal (`=`).
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
}

impl CompareOp {
    /// The operator token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipMode {
    /// `in`
    In,
    /// `not in`
    NotIn,
}

impl fmt::Display for MembershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::NotIn => write!(f, "not in"),
        }
    }
}

/// Logical combinator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalMode {
    /// Conjunction of two or more children.
    And,
    /// Disjunction of two or more children.
    Or,
    /// Negation of exactly one child.
    Not,
}

impl fmt::Display for LogicalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// A node in the filter expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// `field op value`
    Comparison(Comparison),
    /// `field between low,high`
    Range(Range),
    /// `field in v1,v2,...` or `field not in v1,v2,...`
    Membership(Membership),
    /// `(a) and (b)`, `(a) or (b)`, `not (a)`
    Logical(Logical),
}

impl Query {
    /// Build a comparison node.
    #[must_use]
    pub fn comparison(field: Field, op: CompareOp, value: FieldValue) -> Self {
        Self::Comparison(Comparison::new(field, op, value))
    }

    /// Build a range node.
    pub fn range(field: Field, low: FieldValue, high: FieldValue) -> QueryResult<Self> {
        Range::new(field, low, high).map(Self::Range)
    }

    /// Build a membership node.
    pub fn membership(
        field: Field,
        mode: MembershipMode,
        values: impl IntoIterator<Item = FieldValue>,
    ) -> QueryResult<Self> {
        Membership::new(field, mode, values).map(Self::Membership)
    }

    /// Build a logical node.
    pub fn logical(
        mode: LogicalMode,
        children: impl IntoIterator<Item = Query>,
    ) -> QueryResult<Self> {
        Logical::new(mode, children).map(Self::Logical)
    }

    /// Render the tree into its wire-level text form.
    #[must_use]
    pub fn render(&self) -> String {
        let rendered = self.to_string();
        trace!(
            depth = self.depth(),
            predicates = self.predicate_count(),
            len = rendered.len(),
            "rendered query"
        );
        rendered
    }

    /// Number of levels in the tree; a single predicate has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Logical(logical) => {
                1 + logical.children.iter().map(Self::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Number of leaf predicates in the tree.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        match self {
            Self::Logical(logical) => logical.children.iter().map(Self::predicate_count).sum(),
            _ => 1,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison(q) => fmt::Display::fmt(q, f),
            Self::Range(q) => fmt::Display::fmt(q, f),
            Self::Membership(q) => fmt::Display::fmt(q, f),
            Self::Logical(q) => fmt::Display::fmt(q, f),
        }
    }
}

/// Comparison predicate: `field op value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    field: Field,
    op: CompareOp,
    value: FieldValue,
}

impl Comparison {
    /// Create a comparison.
    #[must_use]
    pub fn new(field: Field, op: CompareOp, value: FieldValue) -> Self {
        Self { field, op, value }
    }

    /// Left-hand field.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Operator.
    #[must_use]
    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Right-hand literal.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

/// Inclusive range predicate: `field between low,high`.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    field: Field,
    low: FieldValue,
    high: FieldValue,
}

impl Range {
    /// Create a range.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] if the bounds are of different kinds.
    pub fn new(field: Field, low: FieldValue, high: FieldValue) -> QueryResult<Self> {
        if low.kind() != high.kind() {
            return Err(QueryError::invalid(
                "high",
                format!(
                    "range bounds on '{field}' must share one kind, got {} and {}",
                    low.kind(),
                    high.kind()
                ),
            ));
        }
        Ok(Self { field, low, high })
    }

    /// Field under test.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Lower bound.
    #[must_use]
    pub fn low(&self) -> &FieldValue {
        &self.low
    }

    /// Upper bound.
    #[must_use]
    pub fn high(&self) -> &FieldValue {
        &self.high
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} between {},{}", self.field, self.low, self.high)
    }
}

/// Membership predicate over a non-empty, single-kind list of literals.
///
/// Values keep the order they were supplied in and duplicates are kept; the
/// rendered list is a literal record of the caller's input.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    field: Field,
    mode: MembershipMode,
    values: Vec<FieldValue>,
}

impl Membership {
    /// Create a membership test.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] if `values` is empty or mixes kinds.
    pub fn new(
        field: Field,
        mode: MembershipMode,
        values: impl IntoIterator<Item = FieldValue>,
    ) -> QueryResult<Self> {
        let values: Vec<FieldValue> = values.into_iter().collect();
        let Some(first) = values.first() else {
            return Err(QueryError::invalid(
                "values",
                format!("'{mode}' test on '{field}' needs at least one value"),
            ));
        };
        let kind = first.kind();
        if let Some((pos, other)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| v.kind() != kind)
        {
            return Err(QueryError::invalid(
                "values",
                format!(
                    "'{mode}' values on '{field}' must share one kind: expected {kind}, found {} at position {pos}",
                    other.kind()
                ),
            ));
        }
        Ok(Self {
            field,
            mode,
            values,
        })
    }

    /// Membership test over string literals.
    pub fn from_strings<S: Into<String>>(
        field: Field,
        mode: MembershipMode,
        values: impl IntoIterator<Item = S>,
    ) -> QueryResult<Self> {
        Self::new(field, mode, values.into_iter().map(FieldValue::string))
    }

    /// Membership test over 32-bit integer literals.
    pub fn from_integers(
        field: Field,
        mode: MembershipMode,
        values: impl IntoIterator<Item = i32>,
    ) -> QueryResult<Self> {
        Self::new(field, mode, values.into_iter().map(FieldValue::integer))
    }

    /// Membership test over 64-bit integer literals.
    pub fn from_longs(
        field: Field,
        mode: MembershipMode,
        values: impl IntoIterator<Item = i64>,
    ) -> QueryResult<Self> {
        Self::new(field, mode, values.into_iter().map(FieldValue::long))
    }

    /// Field under test.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// `in` or `not in`.
    #[must_use]
    pub fn mode(&self) -> MembershipMode {
        self.mode
    }

    /// Candidate values in caller order.
    #[must_use]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Kind shared by every value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        // Non-empty by construction.
        self.values[0].kind()
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.field, self.mode)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Logical combinator over child queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Logical {
    mode: LogicalMode,
    children: Vec<Query>,
}

impl Logical {
    /// Create a logical node.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidArgument`] if `and`/`or` get fewer than two
    /// children or `not` gets anything other than exactly one.
    pub fn new(mode: LogicalMode, children: impl IntoIterator<Item = Query>) -> QueryResult<Self> {
        let children: Vec<Query> = children.into_iter().collect();
        let arity_ok = match mode {
            LogicalMode::And | LogicalMode::Or => children.len() >= 2,
            LogicalMode::Not => children.len() == 1,
        };
        if !arity_ok {
            let expected = if mode == LogicalMode::Not {
                "exactly one child"
            } else {
                "at least two children"
            };
            return Err(QueryError::invalid(
                "children",
                format!("'{mode}' requires {expected}, got {}", children.len()),
            ));
        }
        Ok(Self { mode, children })
    }

    pub(crate) fn binary(mode: LogicalMode, left: Query, right: Query) -> Self {
        debug_assert!(mode != LogicalMode::Not);
        Self {
            mode,
            children: vec![left, right],
        }
    }

    pub(crate) fn unary_not(child: Query) -> Self {
        Self {
            mode: LogicalMode::Not,
            children: vec![child],
        }
    }

    /// Combinator mode.
    #[must_use]
    pub fn mode(&self) -> LogicalMode {
        self.mode
    }

    /// Child queries in order.
    #[must_use]
    pub fn children(&self) -> &[Query] {
        &self.children
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == LogicalMode::Not {
            return write!(f, "not ({})", self.children[0]);
        }
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.mode)?;
            }
            write!(f, "({child})")?;
        }
        Ok(())
    }
}
