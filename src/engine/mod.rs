pub mod listener;
pub mod messages;

pub use listener::{ConnectionListener, DispatchOutcome};
pub use messages::PushEvent;
