use crate::{
    predicate::ast::{CompareExpr, Expr},
    value::canonical_cmp,
};
use std::cmp::Ordering;

///
/// Normalize a predicate expression into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Double negation is eliminated
/// - Child expressions are deterministically ordered
///
/// This is used to ensure:
/// - consistent equality checks across construction orders
/// - predictable translation output
/// - stable test behavior
///
#[must_use]
pub(crate) fn normalize(expr: &Expr) -> Expr {
    match expr {
        Expr::True => Expr::True,
        Expr::False => Expr::False,

        Expr::And(children) => normalize_and(children),
        Expr::Or(children) => normalize_or(children),
        Expr::Not(inner) => normalize_not(inner),

        Expr::Compare(cmp) => Expr::Compare(cmp.clone()),
    }
}

///
/// Normalize a NOT expression.
///
/// Eliminates double negation:
///     NOT (NOT x)  →  x
///
fn normalize_not(inner: &Expr) -> Expr {
    let normalized = normalize(inner);

    if let Expr::Not(double) = normalized {
        return normalize(&double);
    }

    Expr::Not(Box::new(normalized))
}

///
/// Normalize an AND expression.
///
/// Rules:
/// - AND(True, x)        → x
/// - AND(False, x)       → False
/// - AND(AND(a, b), c)   → AND(a, b, c)
/// - AND()               → True
///
/// Children are sorted deterministically.
///
fn normalize_and(children: &[Expr]) -> Expr {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Expr::True => {}
            Expr::False => return Expr::False,
            Expr::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return Expr::True;
    }

    out.sort_by(cmp_expr);
    Expr::And(out)
}

///
/// Normalize an OR expression.
///
/// Rules:
/// - OR(False, x)       → x
/// - OR(True, x)        → True
/// - OR(OR(a, b), c)    → OR(a, b, c)
/// - OR()               → False
///
/// Children are sorted deterministically.
///
fn normalize_or(children: &[Expr]) -> Expr {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Expr::False => {}
            Expr::True => return Expr::True,
            Expr::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return Expr::False;
    }

    out.sort_by(cmp_expr);
    Expr::Or(out)
}

///
/// Deterministic structural ordering for child sorting.
///
/// Ordering rules:
/// 1. Node rank
/// 2. Node-specific comparison for same-ranked expressions
///
/// This ordering is used **only for sorting**, not for semantics.
///
fn cmp_expr(left: &Expr, right: &Expr) -> Ordering {
    let rank = expr_rank(left).cmp(&expr_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Expr::And(a), Expr::And(b)) | (Expr::Or(a), Expr::Or(b)) => cmp_children(a, b),
        (Expr::Not(a), Expr::Not(b)) => cmp_expr(a, b),
        (Expr::Compare(a), Expr::Compare(b)) => cmp_compare(a, b),
        _ => Ordering::Equal,
    }
}

const fn expr_rank(expr: &Expr) -> u8 {
    match expr {
        Expr::True => 0,
        Expr::False => 1,
        Expr::And(_) => 2,
        Expr::Or(_) => 3,
        Expr::Not(_) => 4,
        Expr::Compare(_) => 5,
    }
}

fn cmp_children(left: &[Expr], right: &[Expr]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = cmp_expr(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

fn cmp_compare(left: &CompareExpr, right: &CompareExpr) -> Ordering {
    left.path
        .segments()
        .cmp(right.path.segments())
        .then_with(|| left.op.tag().cmp(&right.op.tag()))
        .then_with(|| canonical_cmp(&left.value, &right.value))
}
