//! Message serialization vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use lively_core::protocol::{
    Envelope, Message, DEFAULT_ACTION, DEFAULT_ENVELOPE_ACTION, DEFAULT_N, DEFAULT_SENDER,
};

use vector_loader::load;

fn assert_keys_sorted(v: &Value, path: &str) {
    match v {
        Value::Object(map) => {
            let keys: Vec<&String> = map.keys().collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted, "unsorted keys at {path}");
            for (k, child) in map {
                assert_keys_sorted(child, &format!("{path}.{k}"));
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                assert_keys_sorted(child, &format!("{path}[{i}]"));
            }
        }
        _ => {}
    }
}

#[test]
fn message_vectors() {
    let files = [
        "message_room3.json",
        "message_nested.json",
        "message_string.json",
        "message_array_override.json",
    ];

    for f in files {
        let v = load(f);
        let env = Envelope::new(DEFAULT_ENVELOPE_ACTION, v.room.clone(), v.payload.clone());
        let msg = Message::new(
            v.sender.clone().unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            env,
            v.action.clone().unwrap_or_else(|| DEFAULT_ACTION.to_string()),
            v.n.unwrap_or(DEFAULT_N),
            v.token.clone(),
        );

        let text = msg.to_json_string().unwrap();
        assert_eq!(text, v.expect, "vector={}", v.description);
    }
}

#[test]
fn keys_sorted_at_every_level() {
    // check raw text order, independent of how serde_json backs its maps
    let payload = json!({"zz": {"b": 1, "a": [{"d": 0, "c": 0}]}, "aa": "x"});
    let msg = Message::new(
        DEFAULT_SENDER,
        Envelope::new(DEFAULT_ENVELOPE_ACTION, "room3", payload),
        DEFAULT_ACTION,
        7,
        "tok",
    );
    let text = msg.to_json_string().unwrap();

    let positions: Vec<usize> = ["\"aa\"", "\"zz\"", "\"a\"", "\"b\""]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
    assert!(positions[0] < positions[1], "{text}");
    assert!(positions[2] < positions[3], "{text}");
    assert!(text.find("\"c\"").unwrap() < text.find("\"d\"").unwrap(), "{text}");

    let value = msg.to_value().unwrap();
    assert_keys_sorted(&value, "$");
}

#[test]
fn data_is_always_an_envelope() {
    let msg = Message::new(
        "s",
        Envelope::new("[el-jupyter] message", "room9", json!(17)),
        "a",
        1,
        "t",
    );
    let value = msg.to_value().unwrap();
    let data = value["data"].as_object().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data["room"], "room9");
    assert_eq!(data["action"], "[el-jupyter] message");
    assert_eq!(data["broadcast"], json!({"eventType": "load", "payload": 17}));
    assert_eq!(value["n"], 1);
    assert_eq!(value["token"], "t");
}

#[test]
fn negative_and_large_sequence_numbers_pass_through() {
    for n in [0_i64, -3, i64::MAX] {
        let msg = Message::new("s", Envelope::new("a", "r", Value::Null), "a", n, "t");
        assert_eq!(msg.n(), n);
        assert_eq!(msg.to_value().unwrap()["n"], json!(n));
    }
}
