use crate::value::Value;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Predicate AST
///
/// Pure, record-agnostic representation of predicate expressions. This
/// layer contains no field resolution or capability logic; construction
/// checks live in the builder, evaluation in the eval pass.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[repr(u8)]
pub enum CompareOp {
    #[display("=")]
    Eq = 0x01,
    #[display("!=")]
    Ne = 0x02,
    #[display("<")]
    Lt = 0x03,
    #[display("<=")]
    Lte = 0x04,
    #[display(">")]
    Gt = 0x05,
    #[display(">=")]
    Gte = 0x06,
    #[display("in")]
    In = 0x07,
    #[display("not in")]
    NotIn = 0x08,
    #[display("contains")]
    Contains = 0x09,
    #[display("starts with")]
    StartsWith = 0x0a,
    #[display("ends with")]
    EndsWith = 0x0b,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// FieldPath
///
/// Accessor chain: ordered field names resolved left-to-right from the
/// record under test. A single name is a one-segment path; `"a.b.c"` and
/// `["a", "b", "c"]` convert to the same path.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    #[must_use]
    pub const fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.split('.').map(ToString::to_string).collect())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl From<&[&str]> for FieldPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from(segments.as_slice())
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

///
/// CompareExpr
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CompareExpr {
    pub path: FieldPath,
    pub op: CompareOp,
    pub value: Value,
}

impl fmt::Display for CompareExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.path, self.op, self.value)
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Expr {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(CompareExpr),
}

impl Expr {
    #[must_use]
    pub const fn and(children: Vec<Self>) -> Self {
        Self::And(children)
    }

    #[must_use]
    pub const fn or(children: Vec<Self>) -> Self {
        Self::Or(children)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(child: Self) -> Self {
        Self::Not(Box::new(child))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::And(children) => fmt_joined(f, children, " and "),
            Self::Or(children) => fmt_joined(f, children, " or "),
            Self::Not(inner) => write!(f, "not {inner}"),
            Self::Compare(cmp) => write!(f, "{cmp}"),
        }
    }
}

fn fmt_joined(f: &mut fmt::Formatter<'_>, children: &[Expr], separator: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, ")")
}
