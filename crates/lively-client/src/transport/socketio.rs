//! Socket.IO transport backed by `rust_socketio`'s async client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::{self, FutureExt};
use rust_socketio::asynchronous::{Client as SioClient, ClientBuilder};
use rust_socketio::Payload;
use serde_json::Value;
use tokio::sync::mpsc;

use lively_core::error::{LivelyError, Result};

use super::{Connection, Endpoint, Receipt, Transport};

/// Header carrying the auth token on the opening handshake.
const TOKEN_HEADER: &str = "token";

#[derive(Debug, Default, Clone, Copy)]
pub struct SocketIoTransport;

impl SocketIoTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for SocketIoTransport {
    async fn connect(
        &self,
        endpoint: &Endpoint,
        receipts: mpsc::UnboundedSender<Receipt>,
    ) -> Result<Box<dyn Connection>> {
        let client = ClientBuilder::new(endpoint.url.as_str())
            .namespace(endpoint.namespace.clone())
            .opening_header(TOKEN_HEADER, endpoint.token.clone())
            .on("error", |payload: Payload, _: SioClient| {
                tracing::warn!(?payload, "socket.io transport error");
                future::ready(()).boxed()
            })
            .connect()
            .await
            .map_err(|e| LivelyError::Connect(e.to_string()))?;

        Ok(Box::new(SocketIoConnection {
            client,
            receipts,
            open: AtomicBool::new(true),
        }))
    }
}

struct SocketIoConnection {
    client: SioClient,
    receipts: mpsc::UnboundedSender<Receipt>,
    /// Set when the handshake succeeds and cleared on `disconnect`. The async
    /// socket.io client exposes no status query, so this tracks our own calls
    /// rather than the live socket.
    open: AtomicBool,
}

#[async_trait]
impl Connection for SocketIoConnection {
    /// Handshake-completed flag, not a probe of the underlying socket.
    fn is_connected(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    async fn emit(&self, event: &str, data: Value, ack_timeout: Duration) -> Result<()> {
        let receipts = self.receipts.clone();
        let acked = event.to_string();
        let on_ack = move |payload: Payload, _: SioClient| {
            // receiver gone means the client already disconnected
            let _ = receipts.send(Receipt {
                event: acked.clone(),
                args: payload_args(payload),
            });
            future::ready(()).boxed()
        };

        self.client
            .emit_with_ack(event, data, ack_timeout, on_ack)
            .await
            .map_err(|e| LivelyError::Send(e.to_string()))
    }

    async fn disconnect(&self) -> Result<()> {
        self.open.store(false, Ordering::Release);
        self.client
            .disconnect()
            .await
            .map_err(|e| LivelyError::Disconnect(e.to_string()))
    }
}

fn payload_args(payload: Payload) -> Vec<Value> {
    match payload {
        Payload::Text(values) => values,
        other => vec![Value::String(format!("{other:?}"))],
    }
}
