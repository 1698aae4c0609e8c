use serde::Deserialize;
use url::Url;

use lively_core::error::{LivelyError, Result};
use lively_core::protocol::{DEFAULT_ACTION, DEFAULT_ENVELOPE_ACTION, DEFAULT_SENDER};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub message: MessageSection,

    /// Log every outbound message in full at info level.
    #[serde(default)]
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            message: MessageSection::default(),
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LivelyError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_url")]
    pub url: String,

    /// Transport sub-path, e.g. `/lively-socket.io`.
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Sent as the `token` connection header and copied into every message.
    #[serde(default = "default_token")]
    pub token: String,

    #[serde(default = "default_ack_timeout_ms")]
    pub ack_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: default_path(),
            namespace: default_namespace(),
            token: default_token(),
            ack_timeout_ms: default_ack_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        parse_server_url(&self.url)?;
        if !self.path.starts_with('/') {
            return Err(LivelyError::BadConfig("server.path must start with '/'".into()));
        }
        if !self.namespace.starts_with('/') {
            return Err(LivelyError::BadConfig("server.namespace must start with '/'".into()));
        }
        if !(100..=60000).contains(&self.ack_timeout_ms) {
            return Err(LivelyError::BadConfig(
                "server.ack_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

/// Parse `server.url`, accepting only http, https, ws and wss.
pub(crate) fn parse_server_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| LivelyError::BadConfig(format!("server.url is not a valid url: {e}")))?;
    if !matches!(url.scheme(), "http" | "https" | "ws" | "wss") {
        return Err(LivelyError::BadConfig(format!(
            "server.url scheme must be http, https, ws or wss (got {})",
            url.scheme()
        )));
    }
    Ok(url)
}

fn default_url() -> String {
    "wss://matt.engagelively.com/".into()
}
fn default_path() -> String {
    "/lively-socket.io".into()
}
fn default_namespace() -> String {
    "/l2l".into()
}
fn default_token() -> String {
    "incorrect".into()
}
fn default_ack_timeout_ms() -> u64 {
    5000
}

/// Defaults applied to every `send` unless overridden per call.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    #[serde(default = "default_sender")]
    pub sender: String,

    #[serde(default = "default_action")]
    pub action: String,

    #[serde(default = "default_envelope_action")]
    pub envelope_action: String,
}

impl Default for MessageSection {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            action: default_action(),
            envelope_action: default_envelope_action(),
        }
    }
}

fn default_sender() -> String {
    DEFAULT_SENDER.into()
}
fn default_action() -> String {
    DEFAULT_ACTION.into()
}
fn default_envelope_action() -> String {
    DEFAULT_ENVELOPE_ACTION.into()
}
