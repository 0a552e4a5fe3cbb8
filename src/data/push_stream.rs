use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{CONNECTION, ConnectionTarget};
use crate::data::channel::PushChannel;
use crate::data::socketio::{Frame, decode_frame};
use crate::engine::messages::PushEvent;

/// Push channel over a native WebSocket to the producer's Socket.IO endpoint.
///
/// Answers the handshake and pings itself; reconnecting is left to whoever runs the binary.
pub struct WsPushChannel {
    url: String,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsPushChannel {
    pub async fn connect(target: &ConnectionTarget) -> Result<Self> {
        let url = target.socket_url();
        log::info!(">>> PushChannel: Connecting to {}", url);

        let (stream, _) = connect_async(url.as_str())
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        log::info!("✓ Connected to {}", url);
        Ok(Self { url, stream })
    }

    async fn send_frame(&mut self, frame: &str) -> Result<()> {
        self.stream
            .send(Message::text(frame))
            .await
            .with_context(|| format!("Failed to send '{}' to {}", frame, self.url))
    }

    /// Handle one text frame
    async fn handle_text(&mut self, text: &str) -> FrameAction {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_transport_frames {
            log::info!("[push-stream] {}", text);
        }

        match decode_frame(text) {
            Ok(Frame::Event(event)) => return FrameAction::Emit(event),
            Ok(Frame::Open(_)) => {
                if let Err(e) = self
                    .send_frame(CONNECTION.socket_io.namespace_connect_frame)
                    .await
                {
                    log::error!("⚠️ {:#}", e);
                    return FrameAction::End;
                }
            }
            Ok(Frame::Ping) => {
                if let Err(e) = self.send_frame(CONNECTION.socket_io.pong_frame).await {
                    log::error!("⚠️ {:#}", e);
                    return FrameAction::End;
                }
            }
            Ok(Frame::Connect) => log::info!("✓ Subscribed on {}", self.url),
            Ok(Frame::Close) | Ok(Frame::Disconnect) => {
                log::warn!("Server closed the push session on {}", self.url);
                return FrameAction::End;
            }
            Ok(Frame::ConnectError(reason)) => {
                log::error!("⚠️ Server refused the namespace: {}", reason);
                return FrameAction::End;
            }
            Ok(Frame::Pong) | Ok(Frame::Noop) | Ok(Frame::Unsupported(_)) => {}
            Err(e) => log::error!("⚠️ Unexpected frame {:?}: {:#}", text, e),
        }
        FrameAction::Continue
    }
}

enum FrameAction {
    Emit(PushEvent),
    Continue,
    End,
}

#[async_trait(?Send)]
impl PushChannel for WsPushChannel {
    async fn next_event(&mut self) -> Option<PushEvent> {
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(Message::Text(text)) => match self.handle_text(text.as_str()).await {
                    FrameAction::Emit(event) => return Some(event),
                    FrameAction::Continue => {}
                    FrameAction::End => return None,
                },
                Ok(Message::Close(_)) => {
                    log::warn!("WebSocket closed by {}", self.url);
                    return None;
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // WebSocket keepalive - handled automatically
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("WebSocket error: {}", e);
                    return None;
                }
            }
        }
        None
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
