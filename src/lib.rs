#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod markup;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::ConnectionTarget;
pub use data::{PushChannel, ScriptedChannel};
pub use domain::{InstrumentRecord, RecordError, Status};
pub use engine::{ConnectionListener, DispatchOutcome, PushEvent};
pub use render::{RenderReport, render_snapshot};
pub use ui::{Container, MemoryContainer, SnapshotRenderer, StatusLabelUpdater};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

use crate::config::CONNECTION;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Transport scheme of the push connection
    #[arg(long, default_value = CONNECTION.native.scheme)]
    pub scheme: String,

    /// Host serving the push events
    #[arg(long, default_value = CONNECTION.native.host)]
    pub host: String,

    /// Port serving the push events
    #[arg(long, default_value_t = CONNECTION.native.port)]
    pub port: u16,

    /// Page file rewritten after every event
    #[arg(long, default_value = CONNECTION.native.out_path)]
    pub out: PathBuf,

    /// Render a saved snapshot (JSON array of records) instead of connecting
    #[arg(long)]
    pub replay: Option<PathBuf>,
}
