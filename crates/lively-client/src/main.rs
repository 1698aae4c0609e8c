//! lively-send: connect, send one payload to a room, disconnect.
//!
//! - Config: strict YAML (`--config`), defaults when the file is absent
//! - Payload: JSON argument; anything that is not JSON is sent as a string
//! - Logging: `RUST_LOG=lively_client=debug` shows every lifecycle event

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use lively_client::{config, Client, ClientConfig};
use lively_core::error::Result;

#[derive(Debug, Parser)]
#[command(name = "lively-send", about = "Send one payload to a Lively room")]
struct Args {
    /// YAML config file.
    #[arg(long, default_value = "lively-client.yaml")]
    config: String,

    /// Destination room.
    #[arg(long)]
    room: String,

    /// Overrides `server.token`.
    #[arg(long)]
    token: Option<String>,

    /// How long to wait for the server's acknowledgement before disconnecting.
    #[arg(long, default_value_t = 1000)]
    wait_ms: u64,

    /// Payload, as JSON.
    payload: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut cfg = if Path::new(&args.config).exists() {
        config::load_from_file(&args.config)?
    } else {
        tracing::info!(path = %args.config, "config file not found, using defaults");
        ClientConfig::default()
    };
    if let Some(token) = args.token {
        cfg.server.token = token;
    }

    let payload = serde_json::from_str::<Value>(&args.payload)
        .unwrap_or_else(|_| Value::String(args.payload.clone()));

    let mut client = Client::new(cfg)?;
    client.connect().await?;

    let sent = client.send(payload, &args.room).await;
    if sent.is_ok() {
        tokio::time::sleep(Duration::from_millis(args.wait_ms)).await;
    }
    client.disconnect().await?;
    let text = sent?;
    tracing::info!(room = %args.room, message = %text, "sent");

    for entry in client.log().entries() {
        tracing::info!(at = %entry.timestamp(), event = %entry.event, "lifecycle");
    }
    Ok(())
}
