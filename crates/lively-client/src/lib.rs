//! lively client library entry.
//!
//! Wires configuration, the transport seam, and the client lifecycle into a
//! small connect/send/disconnect surface. Consumed by the `lively-send`
//! binary and by integration tests.

pub mod client;
pub mod config;
pub mod transport;

pub use client::{Client, ClientState, SendOptions};
pub use config::ClientConfig;
pub use transport::{Connection, Endpoint, Receipt, SocketIoTransport, Transport};
