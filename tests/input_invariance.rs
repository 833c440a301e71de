use discounts::{respond, run, Error, FunctionResult};
use proptest::prelude::*;
use serde_json::{Map, Value};

const EXPECTED: &str = "{\n  \"discounts\": [],\n  \"discountApplicationStrategy\": \"FIRST\"\n}\n";

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn json_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-zA-Z_]{1,12}", json_value(), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn any_object_gets_the_fixed_document(object in json_object()) {
        let input = serde_json::to_vec(&Value::Object(object)).unwrap();
        let mut out = Vec::new();
        respond(input.as_slice(), &mut out).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn pretty_printed_input_is_accepted(object in json_object()) {
        let input = serde_json::to_vec_pretty(&Value::Object(object)).unwrap();
        prop_assert_eq!(run(&input).unwrap(), FunctionResult::default());
    }

    #[test]
    fn non_objects_are_rejected(value in json_value().prop_filter("not an object", |v| !v.is_object())) {
        let input = serde_json::to_vec(&value).unwrap();
        let mut out = Vec::new();
        let res = respond(input.as_slice(), &mut out);
        prop_assert!(
            matches!(res, Err(Error::NotAnObject { .. })),
            "unexpected result: {:?}",
            res
        );
        prop_assert!(out.is_empty());
    }

    #[test]
    fn truncated_objects_are_parse_errors(object in json_object()) {
        let input = serde_json::to_vec(&Value::Object(object)).unwrap();
        let truncated = &input[..input.len() - 1];
        prop_assert!(matches!(run(truncated), Err(Error::Parse(_))));
    }
}

#[test]
fn fixed_document_round_trips_through_the_model() {
    let parsed: FunctionResult = serde_json::from_str(EXPECTED).unwrap();
    assert_eq!(parsed, FunctionResult::default());
}
