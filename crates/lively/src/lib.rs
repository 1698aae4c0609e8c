//! Top-level facade crate for lively.
//!
//! Re-exports the core message model and the client library so users can
//! depend on a single crate.

pub mod core {
    pub use lively_core::*;
}

pub mod client {
    pub use lively_client::*;
}

pub use lively_client::{Client, ClientConfig, SendOptions};
pub use lively_core::{Envelope, EventLog, LivelyError, Message, Result};
