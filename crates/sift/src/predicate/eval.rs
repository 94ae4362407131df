use crate::{
    predicate::ast::{CompareExpr, CompareOp, Expr, FieldPath},
    traits::FieldValues,
    value::{Value, compare_eq, compare_order},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of reading an accessor chain from a record during predicate
/// evaluation. Distinguishes a missing field from a present field whose
/// value may be `Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum FieldPresence {
    /// Every path step resolved; the leaf value may be `Value::Null`.
    Present(Value),
    /// Some path step is not present on the record.
    Missing,
}

/// Read an accessor chain left-to-right starting at the record.
///
/// The first segment reads through `FieldValues`; subsequent segments
/// traverse nested `Value::Record` entries. Traversal through any other
/// value shape reads as missing.
pub(crate) fn read_path<R: FieldValues + ?Sized>(record: &R, path: &FieldPath) -> FieldPresence {
    let mut segments = path.iter();

    let Some(first) = segments.next() else {
        return FieldPresence::Missing;
    };
    let Some(mut current) = record.get_value(first) else {
        return FieldPresence::Missing;
    };

    for segment in segments {
        match current.record_field(segment) {
            Some(next) => current = next.clone(),
            None => return FieldPresence::Missing,
        }
    }

    FieldPresence::Present(current)
}

///
/// Evaluate a predicate expression against a single record.
///
/// This function performs **pure runtime evaluation**:
/// - no model access
/// - no construction-time checks
///
/// A missing field or an invalid comparison simply evaluates to `false`.
/// CONTRACT: internal-only; expressions are capability-checked at build.
///
#[must_use]
pub(crate) fn eval<R: FieldValues + ?Sized>(record: &R, expr: &Expr) -> bool {
    match expr {
        Expr::True => true,
        Expr::False => false,

        Expr::And(children) => children.iter().all(|child| eval(record, child)),
        Expr::Or(children) => children.iter().any(|child| eval(record, child)),
        Expr::Not(inner) => !eval(record, inner),

        Expr::Compare(cmp) => eval_compare(record, cmp),
    }
}

///
/// Evaluate a single comparison against a record.
///
/// Returns `false` if:
/// - any accessor-chain step is missing
/// - the comparison is not defined for the runtime value shapes
///
fn eval_compare<R: FieldValues + ?Sized>(record: &R, cmp: &CompareExpr) -> bool {
    let FieldPresence::Present(actual) = read_path(record, &cmp.path) else {
        return false;
    };

    // NOTE: comparison helpers return None when a comparison is invalid;
    // eval treats that as false.
    match cmp.op {
        CompareOp::Eq => compare_eq(&actual, &cmp.value).unwrap_or(false),
        CompareOp::Ne => compare_eq(&actual, &cmp.value).is_some_and(|eq| !eq),

        CompareOp::Lt => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_ge),

        CompareOp::In => actual.in_list(&cmp.value).unwrap_or(false),
        CompareOp::NotIn => actual.in_list(&cmp.value).is_some_and(|found| !found),

        CompareOp::Contains => contains(&actual, &cmp.value),

        CompareOp::StartsWith => actual.text_starts_with(&cmp.value).unwrap_or(false),
        CompareOp::EndsWith => actual.text_ends_with(&cmp.value).unwrap_or(false),
    }
}

///
/// Containment dispatch on the runtime value shape: substring for text,
/// element membership for lists.
///
fn contains(actual: &Value, needle: &Value) -> bool {
    match actual {
        Value::Text(_) => actual.text_contains(needle).unwrap_or(false),
        Value::List(_) => actual.contains(needle).unwrap_or(false),
        _ => false,
    }
}
