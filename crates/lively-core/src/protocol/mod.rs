//! Outbound message model.
//!
//! Every Message carries exactly one Envelope in its `data` field; a raw
//! payload is never sent unwrapped. Serialization is hand-written per entity
//! and emits keys in ascending order at every nesting level, including inside
//! caller-supplied payloads, so the text form is deterministic.

pub mod envelope;
pub mod message;
mod sorted;

pub use envelope::{Broadcast, Envelope, DEFAULT_ENVELOPE_ACTION, EVENT_TYPE_LOAD};
pub use message::{Message, DEFAULT_ACTION, DEFAULT_N, DEFAULT_SENDER};
pub use sorted::Sorted;
