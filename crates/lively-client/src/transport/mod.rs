//! Transport seam.
//!
//! The real-time protocol itself (handshake, framing, heartbeat, reconnect)
//! belongs to the transport collaborator. The client only needs to connect to
//! an [`Endpoint`], emit structured payloads, and learn about acknowledgements,
//! which arrive as [`Receipt`]s on a channel owned by the client.

pub mod socketio;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;
use url::Url;

use lively_core::error::{LivelyError, Result};

use crate::config::schema::parse_server_url;
use crate::config::ServerSection;

pub use socketio::SocketIoTransport;

/// Resolved connection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Server URL with the transport path applied (`https://host/lively-socket.io/`).
    pub url: Url,
    pub namespace: String,
    pub token: String,
}

impl Endpoint {
    /// Build from the server section.
    ///
    /// `ws`/`wss` are mapped to `http`/`https` because the transport starts
    /// with an HTTP handshake and upgrades on its own. The transport path
    /// always ends with `/`.
    pub fn from_server(server: &ServerSection) -> Result<Self> {
        let mut url = parse_server_url(&server.url)?;

        let scheme = match url.scheme() {
            "ws" => Some("http"),
            "wss" => Some("https"),
            _ => None,
        };
        if let Some(scheme) = scheme {
            url.set_scheme(scheme)
                .map_err(|_| LivelyError::BadConfig(format!("cannot use scheme {scheme}")))?;
        }

        let trimmed = server.path.trim_matches('/');
        if trimmed.is_empty() {
            url.set_path("/");
        } else {
            url.set_path(&format!("/{trimmed}/"));
        }

        Ok(Self {
            url,
            namespace: server.namespace.clone(),
            token: server.token.clone(),
        })
    }
}

/// Acknowledgement of one emitted message, with whatever the server replied.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub event: String,
    pub args: Vec<Value>,
}

/// Opens connections. One call per `Client::connect`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn connect(
        &self,
        endpoint: &Endpoint,
        receipts: mpsc::UnboundedSender<Receipt>,
    ) -> Result<Box<dyn Connection>>;
}

/// A live connection. Acks for emitted messages go to the `receipts` sender
/// handed to [`Transport::connect`].
#[async_trait]
pub trait Connection: Send + Sync {
    /// Connection status as tracked by the transport implementation.
    fn is_connected(&self) -> bool;

    async fn emit(&self, event: &str, data: Value, ack_timeout: Duration) -> Result<()>;

    async fn disconnect(&self) -> Result<()>;
}
