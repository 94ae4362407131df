use crate::value::Value;
use std::cmp::Ordering;

/// Equality comparator for predicate evaluation.
///
/// Same-variant values compare structurally; `Int`/`Uint` values compare
/// numerically across the signedness boundary. Any other cross-variant
/// comparison is invalid and returns `None`.
#[must_use]
pub(crate) fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Uint(a), Value::Uint(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        (Value::List(a), Value::List(b)) => Some(a == b),
        (Value::Record(a), Value::Record(b)) => Some(a == b),
        (Value::Null, Value::Null) => Some(true),

        (Value::Int(a), Value::Uint(b)) => Some(u64::try_from(*a).is_ok_and(|a| a == *b)),
        (Value::Uint(a), Value::Int(b)) => Some(u64::try_from(*b).is_ok_and(|b| b == *a)),

        _ => None,
    }
}

/// Ordering comparator for predicate evaluation.
///
/// Defined for `Bool`, `Int`, `Uint`, and `Text`, plus the `Int`/`Uint`
/// numeric widening pair. Returns `None` for every other combination;
/// evaluation treats that as a non-match.
#[must_use]
pub(crate) fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),

        (Value::Int(a), Value::Uint(b)) => Some(cmp_int_uint(*a, *b)),
        (Value::Uint(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),

        _ => None,
    }
}

/// Total canonical comparator used for normalization ordering.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific structural comparison for same-ranked values
///
/// This is NOT the semantic ordering used by predicate evaluation;
/// mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub(crate) fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_list(a, b),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Record(a), Value::Record(b)) => canonical_cmp_record(a, b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Uint(a), Value::Uint(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) => 1,
        Value::List(_) => 2,
        Value::Null => 3,
        Value::Record(_) => 4,
        Value::Text(_) => 5,
        Value::Uint(_) => 6,
    }
}

fn canonical_cmp_list(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn canonical_cmp_record(left: &[(String, Value)], right: &[(String, Value)]) -> Ordering {
    for ((left_name, left_value), (right_name, right_value)) in left.iter().zip(right.iter()) {
        let name_cmp = left_name.cmp(right_name);
        if name_cmp != Ordering::Equal {
            return name_cmp;
        }

        let value_cmp = canonical_cmp(left_value, right_value);
        if value_cmp != Ordering::Equal {
            return value_cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    u64::try_from(a).map_or(Ordering::Less, |a| a.cmp(&b))
}
