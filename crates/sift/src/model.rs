use crate::value::Value;

///
/// RecordModel
///
/// Static runtime model for one record type: the registry consulted by
/// predicate construction. Field lookup replaces reflective member access;
/// per-kind capability checks replace runtime method discovery.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Stable record name used in diagnostics.
    pub name: &'static str,
    /// Ordered field list (authoritative for resolution and
    /// `Value::Record` materialization order).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Look up a direct field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolve an accessor chain left-to-right starting at this model.
    ///
    /// Each intermediate segment must name a `Record`-kinded field, whose
    /// sub-model becomes the scope for the next segment. Returns `None` if
    /// any segment is unknown or traversal hits a non-record field.
    pub fn resolve_path<'a, I>(&self, segments: I) -> Option<&FieldModel>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut segments = segments.into_iter().peekable();
        let mut scope = self;

        loop {
            let name = segments.next()?;
            let field = scope.field(name)?;

            if segments.peek().is_none() {
                return Some(field);
            }

            match field.kind {
                FieldKind::Record(next) => scope = next,
                _ => return None,
            }
        }
    }
}

///
/// FieldModel
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as used in predicates.
    pub name: &'static str,
    /// Declared type shape, carrying the field's operator capabilities.
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Declared field type surface. Aligned with `Value` variants; nested
/// records and list elements reference their own static models so
/// capability checks stay resolvable at arbitrary depth.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Bool,
    Int,
    List(&'static Self),
    Record(&'static RecordModel),
    Text,
    Uint,
}

impl FieldKind {
    /// Whether ordering comparisons are defined for this kind.
    #[must_use]
    pub const fn supports_ordering(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Text | Self::Uint)
    }

    /// Whether substring/prefix/suffix text operators are defined.
    #[must_use]
    pub const fn supports_text_ops(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Whether a containment operator is defined for this kind.
    ///
    /// Text fields support substring containment; list fields support
    /// element membership. Every other kind has no containment operator.
    #[must_use]
    pub const fn supports_contains(&self) -> bool {
        matches!(self, Self::List(_) | Self::Text)
    }

    /// Whether a literal value is comparable with this kind.
    ///
    /// Same-kind literals are admitted; `Int`/`Uint` cross-admit under
    /// numeric widening. List literals must admit every element against
    /// the declared element kind. Record literals are admitted shallowly.
    #[must_use]
    pub fn admits_literal(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Text, Value::Text(_))
            | (Self::Int | Self::Uint, Value::Int(_) | Value::Uint(_))
            | (Self::Record(_), Value::Record(_)) => true,

            (Self::List(element), Value::List(items)) => {
                items.iter().all(|item| element.admits_literal(item))
            }

            _ => false,
        }
    }

    /// Whether a literal is a valid containment needle for this kind.
    #[must_use]
    pub fn admits_needle(&self, needle: &Value) -> bool {
        match self {
            Self::Text => matches!(needle, Value::Text(_)),
            Self::List(element) => element.admits_literal(needle),
            _ => false,
        }
    }
}
