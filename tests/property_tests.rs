//! Property-based tests for the encode/decode contract.
//!
//! Trees built from `Cadena`, `Number` and `List` must survive an encode and
//! decode unchanged once their numbers are in canonical form.

use proptest::prelude::*;
use variant_json::{canonical_number, from_str, to_string, Variant};

fn arb_leaf() -> impl Strategy<Value = Variant> {
    prop_oneof![
        any::<String>().prop_map(Variant::Cadena),
        any::<i32>().prop_map(|n| Variant::Number(canonical_number(f64::from(n)))),
        (-1.0e12f64..1.0e12).prop_map(|f| Variant::Number(canonical_number(f))),
    ]
}

fn arb_tree() -> impl Strategy<Value = Variant> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Variant::List)
    })
}

proptest! {
    #[test]
    fn prop_roundtrip(value in arb_tree()) {
        let json = to_string(&value);
        let back = from_str(&json);
        prop_assert!(back.is_ok(), "failed to decode {}", json);
        prop_assert_eq!(back.unwrap(), value);
    }

    #[test]
    fn prop_encoding_is_valid_json(value in arb_tree()) {
        let json = to_string(&value);
        prop_assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn prop_any_number_text_encodes_as_valid_json(text in any::<String>()) {
        let json = to_string(&Variant::List(vec![Variant::Number(text)]));
        prop_assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok(), "{}", json);
    }

    #[test]
    fn prop_finite_floats_convert(f in any::<f64>()) {
        match Variant::try_from(f) {
            Ok(value) => {
                prop_assert!(f.is_finite());
                prop_assert!(from_str(&to_string(&value)).is_ok());
            }
            Err(_) => prop_assert!(!f.is_finite()),
        }
    }

    #[test]
    fn prop_array_length_preserved(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let json = serde_json::to_string(&items).unwrap();
        let value = from_str(&json).unwrap();
        prop_assert_eq!(value.as_list().map(<[Variant]>::len), Some(items.len()));
    }

    #[test]
    fn prop_object_flattens_to_twice_the_members(
        keys in prop::collection::btree_set("[a-z]{1,8}", 0..16)
    ) {
        let object: serde_json::Map<String, serde_json::Value> = keys
            .iter()
            .map(|k| (k.clone(), serde_json::Value::from(k.len())))
            .collect();
        let json = serde_json::Value::Object(object).to_string();
        let value = from_str(&json).unwrap();
        prop_assert_eq!(value.as_entries().map(<[Variant]>::len), Some(keys.len() * 2));
    }
}
