use serde_json::Value;

use crate::data::channel::PushChannel;
use crate::engine::messages::PushEvent;
use crate::render::RenderReport;
use crate::ui::container::Container;
use crate::ui::renderer::SnapshotRenderer;
use crate::ui::status_label::StatusLabelUpdater;

/// What a single dispatched event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Snapshot(RenderReport),
    Timestamp,
    Ignored,
}

/// Owns the push channel and routes every inbound event to the component that owns
/// the matching container. Handlers run to completion before the next event is pulled.
pub struct ConnectionListener<P, G, L>
where
    P: PushChannel,
    G: Container,
    L: Container,
{
    channel: P,
    renderer: SnapshotRenderer<G>,
    label: StatusLabelUpdater<L>,
    events_seen: usize,
}

impl<P, G, L> ConnectionListener<P, G, L>
where
    P: PushChannel,
    G: Container,
    L: Container,
{
    pub fn new(channel: P, renderer: SnapshotRenderer<G>, label: StatusLabelUpdater<L>) -> Self {
        Self {
            channel,
            renderer,
            label,
            events_seen: 0,
        }
    }

    /// Forward the full sequence, as received, to the renderer
    pub fn on_snapshot(&mut self, records: Vec<Value>) -> RenderReport {
        self.renderer.on_snapshot(records)
    }

    /// Forward the raw string to the label
    pub fn on_timestamp(&mut self, text: &str) {
        self.label.on_timestamp(text);
    }

    pub fn dispatch(&mut self, event: PushEvent) -> DispatchOutcome {
        self.events_seen += 1;
        match event {
            PushEvent::UpdateRecords(records) => DispatchOutcome::Snapshot(self.on_snapshot(records)),
            PushEvent::LastUpdate(text) => {
                self.on_timestamp(&text);
                DispatchOutcome::Timestamp
            }
            PushEvent::Rejected { name, reason } => {
                log::error!("⚠️ Dropping '{}' event: {}", name, reason);
                DispatchOutcome::Ignored
            }
            PushEvent::Other { name } => {
                log::debug!("Ignoring unsubscribed event '{}'", name);
                DispatchOutcome::Ignored
            }
        }
    }

    /// Wait for the next event and dispatch it. `None` once the channel has ended.
    pub async fn step(&mut self) -> Option<DispatchOutcome> {
        let event = self.channel.next_event().await?;
        log::debug!("<<< '{}' from {}", event.name(), self.channel.describe());
        Some(self.dispatch(event))
    }

    /// Dispatch events until the channel ends; returns how many were processed
    pub async fn run(&mut self) -> usize {
        log::info!("Listening for push events from {}", self.channel.describe());
        while self.step().await.is_some() {}
        log::warn!(
            "Push channel {} ended after {} events; no further updates will be shown",
            self.channel.describe(),
            self.events_seen
        );
        self.events_seen
    }

    pub fn renderer(&self) -> &SnapshotRenderer<G> {
        &self.renderer
    }

    pub fn label(&self) -> &StatusLabelUpdater<L> {
        &self.label
    }

    pub fn events_seen(&self) -> usize {
        self.events_seen
    }
}
