//! Envelope construction tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use lively_core::protocol::{Envelope, EVENT_TYPE_LOAD};

#[test]
fn broadcast_wraps_payload_with_load_event() {
    let payloads = [
        json!({"x": 1}),
        json!([1, 2, 3]),
        json!("hello from andi to room 3 hurray"),
        json!(2.5),
        json!(null),
        json!({"deep": {"list": [{"k": true}]}}),
    ];

    for p in payloads {
        let env = Envelope::new("[el-jupyter] message", "room3", p.clone());
        assert_eq!(env.room(), "room3");
        assert_eq!(env.action(), "[el-jupyter] message");
        assert_eq!(env.broadcast().payload(), &p);
        assert_eq!(env.broadcast().event_type(), EVENT_TYPE_LOAD);

        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["broadcast"], json!({"payload": p, "eventType": "load"}));
        assert_eq!(v["room"], "room3");
    }
}

#[test]
fn envelope_text_form() {
    let env = Envelope::new("act", "", Value::Bool(false));
    let s = serde_json::to_string(&env).unwrap();
    assert_eq!(
        s,
        r#"{"action":"act","broadcast":{"eventType":"load","payload":false},"room":""}"#
    );
}
