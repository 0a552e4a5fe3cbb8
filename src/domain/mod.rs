// Domain types
pub mod record;

// Re-export for convenience
pub use record::{InstrumentRecord, RecordError, Status};
