use crate::{
    predicate::{BuildError, CompareOp, Expr, FieldPath, Predicate, PredicateBuilder},
    test_fixtures::{Customer, Probe, alice, bob},
    value::Value,
};

fn builder() -> PredicateBuilder<Customer> {
    PredicateBuilder::new()
}

// ------------------------------------------------------------------
// Resolution
// ------------------------------------------------------------------

#[test]
fn equals_matches_on_text_field() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();

    assert!(p.eval(&alice()));
    assert!(!p.eval(&bob()));
}

#[test]
fn unknown_field_is_an_error() {
    let b = builder();

    assert_eq!(
        b.equals("doesNotExist", 1),
        Err(BuildError::UnknownField {
            record: "Customer",
            path: "doesNotExist".to_string(),
        })
    );
}

#[test]
fn empty_path_is_an_error() {
    let b = builder();

    assert_eq!(
        b.equals(FieldPath::new(vec![]), 1),
        Err(BuildError::EmptyPath)
    );
}

#[test]
fn traversal_through_scalar_field_is_an_error() {
    let b = builder();

    assert!(matches!(
        b.equals("name.length", 5),
        Err(BuildError::UnknownField { .. })
    ));
}

#[test]
fn dotted_path_resolves_nested_field() {
    let b = builder();
    let p = b.equals("address.city", "Louisville").unwrap();

    assert!(p.eval(&alice()));
    assert!(!p.eval(&bob()));

    assert!(matches!(
        b.equals("address.country", "US"),
        Err(BuildError::UnknownField { .. })
    ));
}

// ------------------------------------------------------------------
// Operator capability
// ------------------------------------------------------------------

#[test]
fn contains_on_numeric_field_is_an_error() {
    let b = builder();

    assert_eq!(
        b.contains("age", 5),
        Err(BuildError::InvalidOperator {
            path: "age".to_string(),
            op: CompareOp::Contains,
        })
    );
}

#[test]
fn literal_mismatch_is_an_error() {
    let b = builder();

    assert!(matches!(
        b.equals("age", "thirty"),
        Err(BuildError::LiteralMismatch { .. })
    ));
    assert!(matches!(
        b.contains("tags", 5),
        Err(BuildError::LiteralMismatch { .. })
    ));
    assert!(matches!(
        b.starts_with("name", 1),
        Err(BuildError::LiteralMismatch { .. })
    ));
}

#[test]
fn ordering_on_list_field_is_an_error() {
    let b = builder();

    assert!(matches!(
        b.gte("tags", Value::from_slice(&["vip"])),
        Err(BuildError::InvalidOperator { .. })
    ));
}

// ------------------------------------------------------------------
// Leaf semantics
// ------------------------------------------------------------------

#[test]
fn not_equals_negates_equality() {
    let b = builder();
    let p = b.not_equals("name", "Alice").unwrap();

    assert!(!p.eval(&alice()));
    assert!(p.eval(&bob()));
}

#[test]
fn ordering_comparisons_follow_field_order() {
    let b = builder();

    assert!(b.gte("age", 18u32).unwrap().eval(&alice()));
    assert!(!b.gte("age", 18u32).unwrap().eval(&bob()));
    assert!(b.lt("age", 18u32).unwrap().eval(&bob()));
    assert!(b.lte("age", 30u32).unwrap().eval(&alice()));
    assert!(b.gt("age", 29u32).unwrap().eval(&alice()));
}

#[test]
fn int_literal_widens_against_uint_field() {
    let b = builder();

    // age is declared Uint; a signed literal is admitted and compared
    // numerically.
    assert!(b.gte("age", 18i32).unwrap().eval(&alice()));
    assert!(!b.equals("age", -30i64).unwrap().eval(&alice()));
}

#[test]
fn text_containment_family() {
    let b = builder();

    assert!(b.contains("name", "lic").unwrap().eval(&alice()));
    assert!(!b.contains("name", "xyz").unwrap().eval(&alice()));
    assert!(b.starts_with("name", "Al").unwrap().eval(&alice()));
    assert!(!b.starts_with("name", "Bo").unwrap().eval(&alice()));
    assert!(b.ends_with("name", "ice").unwrap().eval(&alice()));
}

#[test]
fn contains_on_list_field_is_membership() {
    let b = builder();
    let p = b.contains("tags", "vip").unwrap();

    assert!(p.eval(&alice()));
    assert!(!p.eval(&bob()));
}

#[test]
fn member_contains_resolves_accessor_chain() {
    let b = builder();
    let p = b.member_contains("ville", &["address", "city"]).unwrap();

    assert!(p.eval(&alice()));
    assert!(!p.eval(&bob()));

    assert!(matches!(
        b.member_contains("x", &["address", "nope"]),
        Err(BuildError::UnknownField { .. })
    ));
}

#[test]
fn membership_in_literal_list() {
    let b = builder();

    assert!(b.is_in("name", ["Bob", "Alice"]).unwrap().eval(&alice()));
    assert!(!b.is_in("name", ["Bob"]).unwrap().eval(&alice()));
    assert!(b.not_in("age", [17u32]).unwrap().eval(&alice()));
    assert!(!b.not_in("age", [17u32]).unwrap().eval(&bob()));
}

// ------------------------------------------------------------------
// Combinators
// ------------------------------------------------------------------

#[test]
fn and_matches_conjunction() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();
    let q = b.gte("age", 18u32).unwrap();
    let both = b.and(&p, &q);

    for record in [alice(), bob()] {
        assert_eq!(both.eval(&record), p.eval(&record) && q.eval(&record));
    }
    assert!(both.eval(&alice()));
    assert!(!both.eval(&bob()));
}

#[test]
fn or_matches_disjunction() {
    let b = builder();
    let p = b.equals("name", "Bob").unwrap();
    let q = b.equals("name", "Alice").unwrap();
    let either = b.or(&p, &q);

    for record in [alice(), bob()] {
        assert_eq!(either.eval(&record), p.eval(&record) || q.eval(&record));
    }
    assert!(either.eval(&alice()));
}

#[test]
fn not_negates_and_double_negation_restores() {
    let b = builder();
    let p = b.equals("age", 30u32).unwrap();
    let negated = b.not(&p);

    for record in [alice(), bob()] {
        assert_eq!(negated.eval(&record), !p.eval(&record));
        assert_eq!(b.not(&negated).eval(&record), p.eval(&record));
    }
    assert!(!negated.eval(&alice()));
}

#[test]
fn and_short_circuits_left_to_right() {
    let b = PredicateBuilder::<Probe>::new();
    let never = b.equals("zero", 1u64).unwrap();
    let counted = b.equals("counted", 0u64).unwrap();

    let probe = Probe::default();
    assert!(!b.and(&never, &counted).eval(&probe));
    assert_eq!(probe.counted_reads.get(), 0);
}

#[test]
fn or_short_circuits_left_to_right() {
    let b = PredicateBuilder::<Probe>::new();
    let hit = b.equals("zero", 0u64).unwrap();
    let counted = b.equals("counted", 0u64).unwrap();

    let probe = Probe::default();
    assert!(b.or(&hit, &counted).eval(&probe));
    assert_eq!(probe.counted_reads.get(), 0);
}

#[test]
fn operands_stay_usable_after_combination() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();
    let q = b.gte("age", 18u32).unwrap();
    let p_before = p.clone();

    let _combined = b.and(&p, &q);

    assert_eq!(p, p_before);
    assert!(p.eval(&alice()));
    assert!(q.eval(&alice()));
}

#[test]
fn operator_forms_match_builder_combinators() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();
    let q = b.gte("age", 18u32).unwrap();

    assert_eq!(&p & &q, b.and(&p, &q));
    assert_eq!(&p | &q, b.or(&p, &q));
    assert_eq!(p.clone() & q.clone(), b.and(&p, &q));
    assert_eq!(p.clone() | q.clone(), b.or(&p, &q));
}

#[test]
fn always_and_never_are_identities() {
    let always = Predicate::<Customer>::always();
    let never = Predicate::<Customer>::never();

    assert!(always.eval(&alice()));
    assert!(!never.eval(&alice()));
    assert_eq!(always.and(&never).normalize().into_expr(), Expr::False);
}

// ------------------------------------------------------------------
// Scenario
// ------------------------------------------------------------------

#[test]
fn concrete_scenario() {
    // record {name: "Alice", age: 30, address: {city: "Louisville"}}
    let b = builder();
    let record = alice();

    let adult_alice = b.and(
        &b.equals("name", "Alice").unwrap(),
        &b.gte("age", 18u32).unwrap(),
    );
    assert!(adult_alice.eval(&record));

    let in_ville = b.member_contains("ville", &["address", "city"]).unwrap();
    assert!(in_ville.eval(&record));

    let known_name = b.or(
        &b.equals("name", "Bob").unwrap(),
        &b.equals("name", "Alice").unwrap(),
    );
    assert!(known_name.eval(&record));

    let not_thirty = b.not(&b.equals("age", 30u32).unwrap());
    assert!(!not_thirty.eval(&record));
}

// ------------------------------------------------------------------
// Symbolic form
// ------------------------------------------------------------------

#[test]
fn display_renders_compact_form() {
    let b = builder();
    let p = b.and(
        &b.equals("name", "Alice").unwrap(),
        &b.gte("age", 18u32).unwrap(),
    );

    assert_eq!(p.to_string(), "(name = \"Alice\" and age >= 18)");
}

#[test]
fn expr_serde_round_trip() {
    let b = builder();
    let p = b.or(
        &b.member_contains("ville", &["address", "city"]).unwrap(),
        &b.not(&b.equals("active", true).unwrap()),
    );

    let json = serde_json::to_string(p.expr()).unwrap();
    let parsed: Expr = serde_json::from_str(&json).unwrap();

    assert_eq!(&parsed, p.expr());
}

// ------------------------------------------------------------------
// Normalization
// ------------------------------------------------------------------

#[test]
fn normalize_flattens_nested_conjunctions() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();
    let q = b.gte("age", 18u32).unwrap();
    let r = b.equals("active", true).unwrap();

    let nested = b.and(&b.and(&p, &q), &r);
    let Expr::And(children) = nested.normalize().into_expr() else {
        panic!("expected a flat conjunction");
    };

    assert_eq!(children.len(), 3);
}

#[test]
fn normalize_removes_neutral_elements() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();

    let padded = p.and(&Predicate::always());
    assert_eq!(
        padded.normalize().into_expr(),
        Expr::And(vec![p.expr().clone()])
    );

    let blocked = p.and(&Predicate::never());
    assert_eq!(blocked.normalize().into_expr(), Expr::False);
}

#[test]
fn normalize_orders_children_deterministically() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();
    let q = b.gte("age", 18u32).unwrap();

    assert_eq!(b.and(&p, &q).normalize(), b.and(&q, &p).normalize());
}

#[test]
fn normalize_eliminates_double_negation() {
    let b = builder();
    let p = b.equals("name", "Alice").unwrap();

    assert_eq!(
        b.not(&b.not(&p)).normalize().into_expr(),
        p.expr().clone()
    );
}
