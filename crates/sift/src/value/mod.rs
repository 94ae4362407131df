mod compare;

#[cfg(test)]
mod tests;

use crate::traits::RecordKind;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) use compare::{canonical_cmp, compare_eq, compare_order};

///
/// Value
///
/// Runtime value vocabulary for record fields and predicate literals.
///
/// Null   → the field's value is `Option::None`.
/// Record → a nested record materialized as ordered (name, value) entries;
///          this is the scope accessor chains traverse through.
///

#[remain::sorted]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    /// Ordered list of values.
    /// List order is preserved and significant for equality.
    List(Vec<Self>),
    Null,
    /// Nested record entries in model declaration order.
    Record(Vec<(String, Self)>),
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from a list literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Materialize a record instance into a `Value::Record`.
    ///
    /// Entries follow the record model's declaration order; fields the
    /// instance does not expose are omitted and read as missing during
    /// accessor-chain traversal.
    pub fn from_fields<R: RecordKind>(record: &R) -> Self {
        let entries = R::MODEL
            .fields
            .iter()
            .filter_map(|field| {
                record
                    .get_value(field.name)
                    .map(|value| (field.name.to_string(), value))
            })
            .collect();

        Self::Record(entries)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&[(String, Self)]> {
        if let Self::Record(entries) = self {
            Some(entries.as_slice())
        } else {
            None
        }
    }

    /// Look up an entry of a nested record value by field name.
    ///
    /// Returns `None` for non-record values; accessor-chain traversal
    /// treats that as a missing field.
    #[must_use]
    pub fn record_field(&self, name: &str) -> Option<&Self> {
        self.as_record()?
            .iter()
            .find_map(|(entry, value)| (entry == name).then_some(value))
    }

    ///
    /// TEXT COMPARISON
    ///

    fn text_op(&self, other: &Self, f: impl Fn(&str, &str) -> bool) -> Option<bool> {
        let (a, b) = (self.as_text()?, other.as_text()?);
        Some(f(a, b))
    }

    #[must_use]
    /// Check whether `needle` is a substring of `self`.
    pub fn text_contains(&self, needle: &Self) -> Option<bool> {
        self.text_op(needle, |a, b| a.contains(b))
    }

    #[must_use]
    /// Check whether `self` starts with `needle`.
    pub fn text_starts_with(&self, needle: &Self) -> Option<bool> {
        self.text_op(needle, |a, b| a.starts_with(b))
    }

    #[must_use]
    /// Check whether `self` ends with `needle`.
    pub fn text_ends_with(&self, needle: &Self) -> Option<bool> {
        self.text_op(needle, |a, b| a.ends_with(b))
    }

    ///
    /// COLLECTIONS
    ///

    #[must_use]
    /// Returns true if `self` is a list with a member equal to `needle`.
    pub fn contains(&self, needle: &Self) -> Option<bool> {
        self.as_list()
            .map(|items| items.iter().any(|item| compare_eq(item, needle) == Some(true)))
    }

    #[must_use]
    /// Returns true if `self` equals any element of the `haystack` list.
    pub fn in_list(&self, haystack: &Self) -> Option<bool> {
        haystack
            .as_list()
            .map(|items| items.iter().any(|item| compare_eq(self, item) == Some(true)))
    }
}

macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    &str   => Text,
    String => Text,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
            Self::Record(entries) => {
                write!(f, "{{")?;
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}
