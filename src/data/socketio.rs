//! Socket.IO (v5) over Engine.IO (v4) text-frame decoding.
//!
//! Only what a passive subscriber needs: the handshake frames, pings and events.
//! Binary attachments and acks are reported as [`Frame::Unsupported`].

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;

use crate::engine::messages::PushEvent;

/// One decoded transport frame
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Engine.IO handshake (`0{...}`), carrying the session parameters
    Open(Value),
    /// Engine.IO close (`1`)
    Close,
    /// Engine.IO ping (`2`); must be answered with a pong
    Ping,
    /// Engine.IO pong (`3`)
    Pong,
    /// Engine.IO noop (`6`)
    Noop,
    /// Socket.IO namespace joined (`40…`)
    Connect,
    /// Socket.IO namespace left (`41`)
    Disconnect,
    /// Socket.IO namespace refused (`44…`)
    ConnectError(String),
    /// Socket.IO event (`42[...]`)
    Event(PushEvent),
    /// Valid but ignored packet type (acks, binary, upgrade)
    Unsupported(char),
}

pub fn decode_frame(text: &str) -> Result<Frame> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or_else(|| anyhow!("empty frame"))?;
    let body = chars.as_str();
    match kind {
        '0' => {
            let params = serde_json::from_str(body).context("open frame without JSON handshake")?;
            Ok(Frame::Open(params))
        }
        '1' => Ok(Frame::Close),
        '2' => Ok(Frame::Ping),
        '3' => Ok(Frame::Pong),
        '4' => decode_packet(body),
        '5' => Ok(Frame::Unsupported(kind)),
        '6' => Ok(Frame::Noop),
        other => bail!("unknown Engine.IO packet type '{}'", other),
    }
}

/// Socket.IO packet carried inside an Engine.IO message
fn decode_packet(packet: &str) -> Result<Frame> {
    let mut chars = packet.chars();
    let kind = chars
        .next()
        .ok_or_else(|| anyhow!("empty Socket.IO packet"))?;
    let body = chars.as_str();
    match kind {
        '0' => Ok(Frame::Connect),
        '1' => Ok(Frame::Disconnect),
        '2' => decode_event(body).map(Frame::Event),
        '4' => Ok(Frame::ConnectError(body.to_string())),
        '3' | '5' | '6' => Ok(Frame::Unsupported(kind)),
        other => bail!("unknown Socket.IO packet type '{}'", other),
    }
}

/// `[/namespace,][ackid]["name", payload]`
fn decode_event(body: &str) -> Result<PushEvent> {
    let body = strip_namespace(body);
    let body = body.trim_start_matches(|c: char| c.is_ascii_digit());

    let items: Vec<Value> = serde_json::from_str(body).context("event body is not a JSON array")?;
    let mut items = items.into_iter();
    let name = match items.next() {
        Some(Value::String(name)) => name,
        Some(other) => bail!("event name is not a string: {}", other),
        None => bail!("event array is empty"),
    };
    let payload = items.next().unwrap_or(Value::Null);
    Ok(PushEvent::from_named(&name, payload))
}

fn strip_namespace(body: &str) -> &str {
    if !body.starts_with('/') {
        return body;
    }
    match body.find(',') {
        Some(comma) => &body[comma + 1..],
        None => "",
    }
}
