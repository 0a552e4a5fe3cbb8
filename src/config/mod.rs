//! Configuration module for the board application.

pub mod board;
pub mod connection;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use board::BOARD;
pub use connection::{CONNECTION, ConnectionTarget};
