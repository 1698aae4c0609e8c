//! Client lifecycle: `Disconnected -> Connected -> Disconnected`.
//!
//! Every send wraps the caller payload in an [`Envelope`], wraps that in a
//! [`Message`] carrying the configured token, and emits it under the
//! message's action. Lifecycle steps are appended to an [`EventLog`].
//! Acknowledgements are delivered by the transport on its own task and are
//! drained into the log by a receipt task spawned on connect.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use lively_core::error::{LivelyError, Result};
use lively_core::log::EventLog;
use lively_core::protocol::{Envelope, Message, DEFAULT_ACTION, DEFAULT_N, DEFAULT_SENDER};

use crate::config::{ClientConfig, MessageSection};
use crate::transport::{Connection, Endpoint, Receipt, SocketIoTransport, Transport};

pub const EVENT_CONNECTED: &str = "Client Connected";
pub const EVENT_DISCONNECTED: &str = "Client Disconnected";
pub const EVENT_RECEIVED: &str = "Message has been received by server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Disconnected,
    Connected,
}

/// Per-call overrides for `send_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    pub sender: String,
    pub action: String,
    pub n: i64,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.into(),
            action: DEFAULT_ACTION.into(),
            n: DEFAULT_N,
        }
    }
}

impl From<&MessageSection> for SendOptions {
    fn from(m: &MessageSection) -> Self {
        Self {
            sender: m.sender.clone(),
            action: m.action.clone(),
            n: DEFAULT_N,
        }
    }
}

pub struct Client<T: Transport = SocketIoTransport> {
    cfg: ClientConfig,
    endpoint: Endpoint,
    transport: T,
    conn: Option<Box<dyn Connection>>,
    receipt_task: Option<JoinHandle<()>>,
    log: Arc<EventLog>,
}

impl Client<SocketIoTransport> {
    /// Client over the Socket.IO transport.
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        Self::with_transport(cfg, SocketIoTransport::new())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(cfg: ClientConfig, transport: T) -> Result<Self> {
        cfg.validate()?;
        let endpoint = Endpoint::from_server(&cfg.server)?;
        Ok(Self {
            cfg,
            endpoint,
            transport,
            conn: None,
            receipt_task: None,
            log: Arc::new(EventLog::new()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn log(&self) -> Arc<EventLog> {
        Arc::clone(&self.log)
    }

    pub fn state(&self) -> ClientState {
        if self.conn.is_some() {
            ClientState::Connected
        } else {
            ClientState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ClientState::Connected
    }

    /// Open the transport connection. Failures propagate unchanged; there is
    /// no retry.
    pub async fn connect(&mut self) -> Result<()> {
        if self.conn.is_some() {
            return Err(LivelyError::AlreadyConnected);
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<Receipt>();
        let conn = self.transport.connect(&self.endpoint, tx).await?;

        tracing::info!(
            url = %self.endpoint.url,
            namespace = %self.endpoint.namespace,
            "client connected"
        );
        self.log.add_event(conn.is_connected().to_string());
        self.log.add_event(EVENT_CONNECTED);

        let log = Arc::clone(&self.log);
        self.receipt_task = Some(tokio::spawn(async move {
            while let Some(receipt) = rx.recv().await {
                record_receipt(&log, &receipt);
            }
        }));
        self.conn = Some(conn);
        Ok(())
    }

    /// Tear down the connection. Calling this while disconnected is a no-op.
    ///
    /// The client is disconnected afterwards even if the transport reports an
    /// error; the error is still returned and nothing is logged.
    pub async fn disconnect(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        let res = conn.disconnect().await;
        if let Some(task) = self.receipt_task.take() {
            task.abort();
        }
        res?;

        tracing::info!(url = %self.endpoint.url, "client disconnected");
        self.log.add_event(EVENT_DISCONNECTED);
        Ok(())
    }

    /// Send `payload` to `room` with the configured sender/action and `n = 1`.
    pub async fn send(&self, payload: Value, room: &str) -> Result<String> {
        self.send_with(payload, room, SendOptions::from(&self.cfg.message))
            .await
    }

    /// Send with explicit sender/action/n. Returns the serialized message.
    ///
    /// The "sent" log entry is written before the emit and does not mean the
    /// server received anything; receipts are logged separately.
    pub async fn send_with(&self, payload: Value, room: &str, opts: SendOptions) -> Result<String> {
        let conn = self.conn.as_ref().ok_or(LivelyError::NotConnected)?;

        let envelope = Envelope::new(self.cfg.message.envelope_action.as_str(), room, payload);
        let message = Message::new(
            opts.sender,
            envelope,
            opts.action,
            opts.n,
            self.cfg.server.token.as_str(),
        );
        let text = message.to_json_string()?;
        let data = message.to_value()?;

        if self.cfg.debug {
            tracing::info!(
                "This is the message that is being sent:\n<<<LivelyMessage>>>{text}<<<LivelyMessage>>>"
            );
        } else {
            tracing::debug!(room, n = message.n(), action = message.action(), "sending message");
        }
        self.log.add_event(format!("Sent message to room {room}"));

        conn.emit(message.action(), data, self.ack_timeout()).await?;
        Ok(text)
    }

    /// Receipt callback: logs the acknowledgement and nothing else.
    pub fn message_received(&self, receipt: &Receipt) {
        record_receipt(&self.log, receipt);
    }

    fn ack_timeout(&self) -> Duration {
        Duration::from_millis(self.cfg.server.ack_timeout_ms)
    }
}

/// Dropping a connected client closes the connection on the current tokio
/// runtime. Outside a runtime the connection is dropped without a close.
/// Nothing is logged either way; call `disconnect` to get the log entry.
impl<T: Transport> Drop for Client<T> {
    fn drop(&mut self) {
        if let Some(task) = self.receipt_task.take() {
            task.abort();
        }
        let Some(conn) = self.conn.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = conn.disconnect().await {
                        tracing::warn!(error = %e, "disconnect on drop failed");
                    }
                });
            }
            Err(_) => {
                tracing::warn!("client dropped outside a tokio runtime; connection not closed");
            }
        }
    }
}

fn record_receipt(log: &EventLog, receipt: &Receipt) {
    tracing::debug!(event = %receipt.event, args = receipt.args.len(), "message acknowledged");
    log.add_event(EVENT_RECEIVED);
}
