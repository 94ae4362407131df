use crate::{
    model::FieldModel,
    predicate::{
        ast::{CompareExpr, CompareOp, Expr, FieldPath},
        eval, normalize,
    },
    traits::RecordKind,
    value::Value,
};
use std::{
    fmt,
    marker::PhantomData,
    ops::{BitAnd, BitOr},
};
use thiserror::Error as ThisError;

///
/// BuildError
///
/// Construction-time failures of the leaf factories. Every failure is
/// structural: a predicate either fully builds or no predicate exists.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BuildError {
    #[error("empty field path")]
    EmptyPath,

    #[error("operator {op} is not valid for field '{path}'")]
    InvalidOperator { path: String, op: CompareOp },

    #[error("literal {value} is not comparable with field '{path}'")]
    LiteralMismatch { path: String, value: Value },

    #[error("record '{record}' has no field '{path}'")]
    UnknownField { record: &'static str, path: String },
}

///
/// Predicate
///
/// Immutable boolean expression over one record type, usable in two
/// equivalent forms: executable (`eval`) and symbolic (`expr`).
///
/// The type parameter pins the record schema; it is what lets two
/// independently-built predicates merge into one function of one record.
/// Combinators borrow their operands, so inputs stay valid and reusable
/// after combination.
///

pub struct Predicate<R: RecordKind> {
    expr: Expr,
    _record: PhantomData<fn(&R) -> bool>,
}

impl<R: RecordKind> Predicate<R> {
    pub(crate) const fn from_expr(expr: Expr) -> Self {
        Self {
            expr,
            _record: PhantomData,
        }
    }

    /// Predicate that matches every record.
    #[must_use]
    pub const fn always() -> Self {
        Self::from_expr(Expr::True)
    }

    /// Predicate that matches no record.
    #[must_use]
    pub const fn never() -> Self {
        Self::from_expr(Expr::False)
    }

    /// Evaluate against a concrete record.
    #[must_use]
    pub fn eval(&self, record: &R) -> bool {
        eval(record, &self.expr)
    }

    /// Symbolic form, for inspection and external translation.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    #[must_use]
    pub fn into_expr(self) -> Expr {
        self.expr
    }

    /// Canonicalized copy: flattened AND/OR, neutral elements removed,
    /// double negation eliminated, children deterministically ordered.
    ///
    /// Evaluation order of the original is not preserved; use this for
    /// stable comparison or translation, not to rewrite in place.
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self::from_expr(normalize(&self.expr))
    }

    /// Conjunction. Short-circuits left-to-right at evaluation.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        Self::from_expr(Expr::And(vec![self.expr.clone(), other.expr.clone()]))
    }

    /// Disjunction. Short-circuits left-to-right at evaluation.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        Self::from_expr(Expr::Or(vec![self.expr.clone(), other.expr.clone()]))
    }

    /// Negation.
    #[must_use]
    pub fn not(&self) -> Self {
        Self::from_expr(Expr::not(self.expr.clone()))
    }
}

impl<R: RecordKind> Clone for Predicate<R> {
    fn clone(&self) -> Self {
        Self::from_expr(self.expr.clone())
    }
}

impl<R: RecordKind> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.expr).finish()
    }
}

impl<R: RecordKind> fmt::Display for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl<R: RecordKind> PartialEq for Predicate<R> {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

impl<R: RecordKind> Eq for Predicate<R> {}

impl<R: RecordKind> BitAnd for Predicate<R> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_expr(Expr::And(vec![self.expr, rhs.expr]))
    }
}

impl<R: RecordKind> BitAnd for &Predicate<R> {
    type Output = Predicate<R>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<R: RecordKind> BitOr for Predicate<R> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_expr(Expr::Or(vec![self.expr, rhs.expr]))
    }
}

impl<R: RecordKind> BitOr for &Predicate<R> {
    type Output = Predicate<R>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

///
/// PredicateBuilder
///
/// Typed factory for predicates over one record type.
///
/// Each leaf factory resolves its field path against `R::MODEL` and checks
/// that the operator and literal are defined for the resolved field's
/// kind. Resolution failures are returned, never raised, and no partial
/// predicate is ever produced.
///
/// The builder holds no state: every instance of the same record type
/// builds against the same static model, so predicates from different
/// builder instances of one record type combine soundly.
///

pub struct PredicateBuilder<R: RecordKind> {
    _record: PhantomData<fn(&R) -> bool>,
}

impl<R: RecordKind> PredicateBuilder<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }

    // ------------------------------------------------------------------
    // Leaf factories
    // ------------------------------------------------------------------

    /// Native equality against the resolved field's value.
    pub fn equals(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Eq, value.into())
    }

    /// Native inequality against the resolved field's value.
    pub fn not_equals(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Ne, value.into())
    }

    /// Ordering comparison: field < literal.
    pub fn lt(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Lt, value.into())
    }

    /// Ordering comparison: field <= literal.
    pub fn lte(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Lte, value.into())
    }

    /// Ordering comparison: field > literal.
    pub fn gt(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Gt, value.into())
    }

    /// Ordering comparison: field >= literal.
    pub fn gte(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Gte, value.into())
    }

    /// Containment: substring for text fields, element membership for
    /// list fields. Fields of any other kind have no containment
    /// operator and fail construction.
    pub fn contains(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::Contains, value.into())
    }

    /// Text prefix match.
    pub fn starts_with(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::StartsWith, value.into())
    }

    /// Text suffix match.
    pub fn ends_with(
        &self,
        path: impl Into<FieldPath>,
        value: impl Into<Value>,
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(path.into(), CompareOp::EndsWith, value.into())
    }

    /// Chained-path containment: the field is located via an explicit
    /// multi-step accessor chain. All path steps must resolve or the
    /// whole operation fails.
    pub fn member_contains(
        &self,
        value: impl Into<Value>,
        segments: &[&str],
    ) -> Result<Predicate<R>, BuildError> {
        Self::compare(FieldPath::from(segments), CompareOp::Contains, value.into())
    }

    /// Membership of the field's value in a literal list.
    pub fn is_in<I, V>(
        &self,
        path: impl Into<FieldPath>,
        values: I,
    ) -> Result<Predicate<R>, BuildError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::compare(path.into(), CompareOp::In, Value::from_list(values.into_iter().collect()))
    }

    /// Negated membership of the field's value in a literal list.
    pub fn not_in<I, V>(
        &self,
        path: impl Into<FieldPath>,
        values: I,
    ) -> Result<Predicate<R>, BuildError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::compare(path.into(), CompareOp::NotIn, Value::from_list(values.into_iter().collect()))
    }

    // ------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------

    /// Conjunction of two predicates. Operands stay usable.
    #[must_use]
    pub fn and(&self, left: &Predicate<R>, right: &Predicate<R>) -> Predicate<R> {
        left.and(right)
    }

    /// Disjunction of two predicates. Operands stay usable.
    #[must_use]
    pub fn or(&self, left: &Predicate<R>, right: &Predicate<R>) -> Predicate<R> {
        left.or(right)
    }

    /// Negation of a predicate. The operand stays usable.
    #[must_use]
    pub fn not(&self, inner: &Predicate<R>) -> Predicate<R> {
        inner.not()
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    fn resolve(path: &FieldPath) -> Result<&'static FieldModel, BuildError> {
        if path.is_empty() {
            return Err(BuildError::EmptyPath);
        }

        R::MODEL
            .resolve_path(path.iter().map(String::as_str))
            .ok_or_else(|| BuildError::UnknownField {
                record: R::MODEL.name,
                path: path.to_string(),
            })
    }

    fn compare(path: FieldPath, op: CompareOp, value: Value) -> Result<Predicate<R>, BuildError> {
        let field = Self::resolve(&path)?;
        let kind = field.kind;

        let admitted = match op {
            CompareOp::Eq | CompareOp::Ne => kind.admits_literal(&value),

            CompareOp::Lt | CompareOp::Lte | CompareOp::Gt | CompareOp::Gte => {
                if !kind.supports_ordering() {
                    return Err(BuildError::InvalidOperator {
                        path: path.to_string(),
                        op,
                    });
                }
                kind.admits_literal(&value)
            }

            CompareOp::Contains => {
                if !kind.supports_contains() {
                    return Err(BuildError::InvalidOperator {
                        path: path.to_string(),
                        op,
                    });
                }
                kind.admits_needle(&value)
            }

            CompareOp::StartsWith | CompareOp::EndsWith => {
                if !kind.supports_text_ops() {
                    return Err(BuildError::InvalidOperator {
                        path: path.to_string(),
                        op,
                    });
                }
                matches!(value, Value::Text(_))
            }

            CompareOp::In | CompareOp::NotIn => value
                .as_list()
                .is_some_and(|items| items.iter().all(|item| kind.admits_literal(item))),
        };

        if !admitted {
            return Err(BuildError::LiteralMismatch {
                path: path.to_string(),
                value,
            });
        }

        Ok(Predicate::from_expr(Expr::Compare(CompareExpr {
            path,
            op,
            value,
        })))
    }
}

impl<R: RecordKind> Default for PredicateBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
