//! Message: the outer structure handed to the transport.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{LivelyError, Result};

use super::Envelope;

/// Default sender tag.
pub const DEFAULT_SENDER: &str = "lively_client client";
/// Default message action (also the emitted event name).
pub const DEFAULT_ACTION: &str = "[broadcast] send";
/// Default sequence number.
pub const DEFAULT_N: i64 = 1;

/// Outbound message: sender/action/sequence/token metadata around one Envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    sender: String,
    data: Envelope,
    action: String,
    n: i64,
    token: String,
}

impl Message {
    pub fn new(
        sender: impl Into<String>,
        data: Envelope,
        action: impl Into<String>,
        n: i64,
        token: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            data,
            action: action.into(),
            n,
            token: token.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn data(&self) -> &Envelope {
        &self.data
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Deterministic JSON text, keys sorted at every level.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| LivelyError::Encode(format!("message json: {e}")))
    }

    /// Structured form handed to the transport.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| LivelyError::Encode(format!("message value: {e}")))
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Message", 5)?;
        st.serialize_field("action", &self.action)?;
        st.serialize_field("data", &self.data)?;
        st.serialize_field("n", &self.n)?;
        st.serialize_field("sender", &self.sender)?;
        st.serialize_field("token", &self.token)?;
        st.end()
    }
}
