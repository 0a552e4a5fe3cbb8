use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, unbounded};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MessageEvent, WebSocket};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{CONNECTION, ConnectionTarget};
use crate::data::channel::PushChannel;
use crate::data::socketio::{Frame, decode_frame};
use crate::engine::messages::PushEvent;

/// Push channel over the browser's WebSocket.
///
/// Frames arrive through JS callbacks and are queued for the listener's async loop.
pub struct BrowserPushChannel {
    url: String,
    _socket: WebSocket,
    events: UnboundedReceiver<PushEvent>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(web_sys::Event)>,
}

impl BrowserPushChannel {
    pub fn connect(target: &ConnectionTarget) -> Result<Self> {
        let url = target.socket_url();
        log::info!(">>> PushChannel: Connecting to {}", url);

        let socket =
            WebSocket::new(&url).map_err(|e| anyhow!("WebSocket::new({}) failed: {:?}", url, e))?;
        let (tx, events) = unbounded::<PushEvent>();

        let reply = socket.clone();
        let tx_message = tx.clone();
        let on_message = Closure::wrap(Box::new(move |ev: MessageEvent| {
            let Some(text) = ev.data().as_string() else {
                return;
            };

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_transport_frames {
                log::info!("[push-stream] {}", text);
            }

            match decode_frame(&text) {
                Ok(Frame::Event(event)) => {
                    if let Err(e) = tx_message.unbounded_send(event) {
                        log::error!("⚠️ Listener gone, dropping '{}' event", e.into_inner().name());
                        tx_message.close_channel();
                    }
                }
                Ok(Frame::Open(_)) => {
                    let frame = CONNECTION.socket_io.namespace_connect_frame;
                    if let Err(e) = reply.send_with_str(frame) {
                        log::error!("⚠️ Failed to send {:?}: {:?}", frame, e);
                        tx_message.close_channel();
                    }
                }
                Ok(Frame::Ping) => {
                    let frame = CONNECTION.socket_io.pong_frame;
                    if let Err(e) = reply.send_with_str(frame) {
                        log::error!("⚠️ Failed to send {:?}: {:?}", frame, e);
                        tx_message.close_channel();
                    }
                }
                Ok(Frame::Connect) => log::info!("✓ Subscribed to push events"),
                Ok(Frame::Close) | Ok(Frame::Disconnect) => {
                    log::warn!("Server closed the push session");
                    tx_message.close_channel();
                }
                Ok(Frame::ConnectError(reason)) => {
                    log::error!("⚠️ Server refused the namespace: {}", reason);
                    tx_message.close_channel();
                }
                Ok(Frame::Pong) | Ok(Frame::Noop) | Ok(Frame::Unsupported(_)) => {}
                Err(e) => log::error!("⚠️ Unexpected frame {:?}: {:#}", text, e),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_close = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            log::warn!("WebSocket closed");
            tx.close_channel();
        }) as Box<dyn FnMut(web_sys::Event)>);
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            url,
            _socket: socket,
            events,
            _on_message: on_message,
            _on_close: on_close,
        })
    }
}

#[async_trait(?Send)]
impl PushChannel for BrowserPushChannel {
    async fn next_event(&mut self) -> Option<PushEvent> {
        self.events.next().await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
