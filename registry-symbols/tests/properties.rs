//! Merge, sort and render properties over generated records.

use std::cmp::Ordering;

use proptest::prelude::*;
use registry_kit::{ItemClass, RecordSchema};
use registry_symbols::{symbol_class, SymbolData, SymbolsConfig, SYMBOL_FIELDS};
use rstest::rstest;
use serde_json::{json, Map, Value};

fn class() -> RecordSchema<SymbolData> {
    symbol_class(&SymbolsConfig::default()).unwrap()
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Zé0-9 ]{0,8}".prop_map(Value::String),
    ]
}

fn any_json() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("(eng|fre|fig1|arrows|[a-z]{1,4})", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// A record whose declared fields are each either absent or arbitrary JSON.
fn partial_record() -> impl Strategy<Value = Value> {
    let keys: Vec<&'static str> = SYMBOL_FIELDS.iter().map(|d| d.key).collect();
    prop::collection::vec(prop::option::of(any_json()), keys.len()).prop_map(move |values| {
        let fields = keys
            .iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect::<Map<_, _>>();
        Value::Object(fields)
    })
}

/// A record with well-shaped values for a subset of fields.
fn well_formed_partial() -> impl Strategy<Value = Value> {
    (
        prop::option::of("[A-Z0-9 -]{0,10}"),
        prop::option::of(("[a-z]{0,6}", "[a-z]{0,6}")),
        prop::option::of(prop::collection::vec("[a-z]{1,5}", 0..4)),
        prop::option::of(prop::option::of("[a-z]{0,4}")),
    )
        .prop_map(|(identifier, title, authors, arrows)| {
            let mut record = Map::new();
            if let Some(id) = identifier {
                record.insert("identifier".into(), json!(id));
            }
            if let Some((eng, fre)) = title {
                record.insert("title".into(), json!({ "eng": eng, "fre": fre }));
            }
            if let Some(authors) = authors {
                record.insert("authors".into(), json!(authors));
            }
            if let Some(arrows) = arrows {
                record.insert("form".into(), json!({ "arrows": arrows }));
            }
            Value::Object(record)
        })
}

proptest! {
    #[test]
    fn detail_of_merged_record_never_panics(partial in partial_record()) {
        let class = class();
        let view = class.detail_view(&class.merge(&partial));
        // Merged records carry every required field, so breakage can only come
        // from a wrongly shaped value, never from absence.
        if let registry_views::ViewNode::BrokenItem { missing, .. } = &view {
            prop_assert!(missing.is_empty());
        }
    }

    #[test]
    fn list_row_never_panics(partial in any_json()) {
        let _ = class().list_item_view(&partial);
    }

    #[test]
    fn merge_is_idempotent(partial in partial_record()) {
        let class = class();
        let once = class.merge(&partial);
        prop_assert_eq!(class.merge(&once), once);
    }

    #[test]
    fn well_formed_records_render_fully(partial in well_formed_partial()) {
        let class = class();
        let merged = class.merge(&partial);
        prop_assert!(!class.detail_view(&merged).is_broken());
        let typed = class.typed(&merged).unwrap();
        prop_assert_eq!(serde_json::to_value(&typed).unwrap(), merged);
    }

    #[test]
    fn sorter_is_antisymmetric(a in "[A-Za-z0-9]{0,6}", b in "[A-Za-z0-9]{0,6}") {
        let class = class();
        let (ra, rb) = (json!({ "identifier": a }), json!({ "identifier": b }));
        prop_assert_eq!(class.item_sorter(&ra, &rb), class.item_sorter(&rb, &ra).reverse());
    }
}

#[test]
fn default_record_renders_without_breaking() {
    let class = class();
    let defaults = class.defaults();
    assert!(!class.detail_view(&defaults).is_broken());
    assert!(!class.edit_view(&defaults, None).node().is_broken());
}

#[rstest]
#[case(json!({ "identifier": "A001" }), json!({ "identifier": "A010" }), Ordering::Less)]
#[case(json!({ "identifier": "A010" }), json!({ "identifier": "B001" }), Ordering::Less)]
#[case(json!({ "identifier": "B001" }), json!({ "identifier": "A001" }), Ordering::Greater)]
#[case(json!({}), json!({ "identifier": "" }), Ordering::Equal)]
#[case(json!({ "identifier": null }), json!({ "identifier": "A001" }), Ordering::Less)]
#[case(json!({ "identifier": "" }), json!({ "identifier": "A001" }), Ordering::Less)]
#[case(json!({ "identifier": "a001" }), json!({ "identifier": "A010" }), Ordering::Less)]
#[case(json!({ "identifier": "a001" }), json!({ "identifier": "A001" }), Ordering::Less)]
fn sorter_orders_identifiers(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
    assert_eq!(class().item_sorter(&a, &b), expected);
}
