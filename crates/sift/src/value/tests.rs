use crate::{
    test_fixtures::alice,
    value::{Value, canonical_cmp, compare_eq, compare_order},
};
use std::cmp::Ordering;

#[test]
fn same_variant_equality_is_structural() {
    assert_eq!(
        compare_eq(&Value::Text("a".into()), &Value::Text("a".into())),
        Some(true)
    );
    assert_eq!(compare_eq(&Value::Int(1), &Value::Int(2)), Some(false));
    assert_eq!(compare_eq(&Value::Null, &Value::Null), Some(true));
}

#[test]
fn cross_variant_equality_is_invalid() {
    assert_eq!(compare_eq(&Value::Int(1), &Value::Text("1".into())), None);
    assert_eq!(compare_eq(&Value::Bool(true), &Value::Uint(1)), None);
}

#[test]
fn int_uint_equality_widens() {
    assert_eq!(compare_eq(&Value::Int(5), &Value::Uint(5)), Some(true));
    assert_eq!(compare_eq(&Value::Uint(5), &Value::Int(5)), Some(true));
    assert_eq!(compare_eq(&Value::Int(-5), &Value::Uint(5)), Some(false));
}

#[test]
fn int_uint_ordering_widens() {
    assert_eq!(
        compare_order(&Value::Int(-1), &Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        compare_order(&Value::Uint(3), &Value::Int(2)),
        Some(Ordering::Greater)
    );
    assert_eq!(
        compare_order(&Value::Int(7), &Value::Uint(7)),
        Some(Ordering::Equal)
    );
}

#[test]
fn unordered_variants_have_no_ordering() {
    assert_eq!(compare_order(&Value::Null, &Value::Null), None);
    assert_eq!(
        compare_order(&Value::List(vec![]), &Value::List(vec![])),
        None
    );
    assert_eq!(compare_order(&Value::Int(1), &Value::Text("1".into())), None);
}

#[test]
fn canonical_cmp_is_rank_first() {
    // Bool ranks before Int, Int before Text, regardless of payload.
    assert_eq!(
        canonical_cmp(&Value::Bool(true), &Value::Int(i64::MIN)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Text(String::new()), &Value::Int(0)),
        Ordering::Greater
    );
    assert_eq!(canonical_cmp(&Value::Int(1), &Value::Int(2)), Ordering::Less);
}

#[test]
fn text_operations() {
    let haystack = Value::from("Louisville");

    assert_eq!(haystack.text_contains(&Value::from("ville")), Some(true));
    assert_eq!(haystack.text_contains(&Value::from("xyz")), Some(false));
    assert_eq!(haystack.text_starts_with(&Value::from("Lou")), Some(true));
    assert_eq!(haystack.text_ends_with(&Value::from("lle")), Some(true));
    assert_eq!(haystack.text_contains(&Value::Int(1)), None);
    assert_eq!(Value::Int(1).text_contains(&Value::from("1")), None);
}

#[test]
fn list_membership() {
    let list = Value::from_slice(&["vip", "beta"]);

    assert_eq!(list.contains(&Value::from("vip")), Some(true));
    assert_eq!(list.contains(&Value::from("admin")), Some(false));
    assert_eq!(Value::from("vip").contains(&Value::from("v")), None);

    assert_eq!(Value::from("vip").in_list(&list), Some(true));
    assert_eq!(Value::from("admin").in_list(&list), Some(false));
    assert_eq!(Value::from("vip").in_list(&Value::from("vip")), None);
}

#[test]
fn record_field_lookup() {
    let record = Value::from_fields(&alice().address);

    assert_eq!(
        record.record_field("city"),
        Some(&Value::from("Louisville"))
    );
    assert_eq!(record.record_field("country"), None);
    assert_eq!(Value::Int(1).record_field("city"), None);
}

#[test]
fn from_fields_follows_model_order() {
    let record = Value::from_fields(&alice());

    let Value::Record(entries) = record else {
        panic!("expected a record value");
    };
    let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(names, ["name", "age", "active", "tags", "address"]);
}

#[test]
fn display_renders_literals() {
    assert_eq!(Value::from("x").to_string(), "\"x\"");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from_slice(&[1u64, 2]).to_string(), "[1, 2]");
    assert_eq!(
        Value::Record(vec![("a".to_string(), Value::Bool(true))]).to_string(),
        "{a: true}"
    );
}
