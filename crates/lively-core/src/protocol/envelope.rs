//! Envelope: the inner wrapper around a caller payload.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Sorted;

/// Envelope action used by the client for every send.
pub const DEFAULT_ENVELOPE_ACTION: &str = "[el-jupyter] message";

/// Fixed `eventType` carried in every broadcast block.
pub const EVENT_TYPE_LOAD: &str = "load";

/// `broadcast` block: `{eventType: "load", payload}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Broadcast {
    payload: Value,
}

impl Broadcast {
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn event_type(&self) -> &'static str {
        EVENT_TYPE_LOAD
    }
}

impl Serialize for Broadcast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Broadcast", 2)?;
        st.serialize_field("eventType", EVENT_TYPE_LOAD)?;
        st.serialize_field("payload", &Sorted(&self.payload))?;
        st.end()
    }
}

/// Inner payload structure addressed to a room.
///
/// Built fresh per send and never mutated afterwards. Any payload shape is
/// accepted and passed through opaquely.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    action: String,
    room: String,
    broadcast: Broadcast,
}

impl Envelope {
    pub fn new(action: impl Into<String>, room: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            room: room.into(),
            broadcast: Broadcast { payload },
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn broadcast(&self) -> &Broadcast {
        &self.broadcast
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // keys in ascending order
        let mut st = serializer.serialize_struct("Envelope", 3)?;
        st.serialize_field("action", &self.action)?;
        st.serialize_field("broadcast", &self.broadcast)?;
        st.serialize_field("room", &self.room)?;
        st.end()
    }
}
