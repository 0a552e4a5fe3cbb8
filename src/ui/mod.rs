// Display side: containers and the two components that own them
pub mod container;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod page;
pub mod renderer;
pub mod status_label;

// Re-export the components
pub use container::{Container, MemoryContainer};
#[cfg(target_arch = "wasm32")]
pub use dom::DomContainer;
pub use renderer::SnapshotRenderer;
pub use status_label::StatusLabelUpdater;
