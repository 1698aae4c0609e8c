//! lively core: transport-agnostic message model, event log, and errors.
//!
//! This crate defines the outbound wire shape (Envelope wrapped in a Message)
//! and the append-only lifecycle log shared by the client. It carries no
//! transport or runtime dependencies so it can be reused and tested in
//! isolation.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `LivelyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod log;
pub mod protocol;

pub use error::{ErrorCode, LivelyError, Result};
pub use log::{EventLog, LogEntry};
pub use protocol::{Envelope, Message};
