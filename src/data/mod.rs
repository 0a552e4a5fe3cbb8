// Inbound push transport
#[cfg(target_arch = "wasm32")]
pub mod browser_socket;
pub mod channel;
#[cfg(not(target_arch = "wasm32"))]
pub mod push_stream;
pub mod socketio;

// Re-export commonly used types
#[cfg(target_arch = "wasm32")]
pub use browser_socket::BrowserPushChannel;
pub use channel::{PushChannel, ScriptedChannel};
#[cfg(not(target_arch = "wasm32"))]
pub use push_stream::WsPushChannel;
