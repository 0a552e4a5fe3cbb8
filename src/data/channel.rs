use std::collections::VecDeque;

use async_trait::async_trait;

use crate::engine::messages::PushEvent;

/// Source of inbound push events.
///
/// Implementations own the transport handle; the listener only ever pulls decoded events.
/// `?Send` so the browser channel (holding JS closures) fits the same seam.
#[async_trait(?Send)]
pub trait PushChannel {
    /// Next event in delivery order, or `None` once the channel has ended
    async fn next_event(&mut self) -> Option<PushEvent>;

    /// Human-readable description of where events come from (for logs)
    fn describe(&self) -> String;
}

/// Channel that replays a fixed list of events, then ends.
/// Used for offline replays and to drive the listener in tests.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    label: String,
    events: VecDeque<PushEvent>,
}

impl ScriptedChannel {
    pub fn new(label: impl Into<String>, events: impl IntoIterator<Item = PushEvent>) -> Self {
        Self {
            label: label.into(),
            events: events.into_iter().collect(),
        }
    }
}

#[async_trait(?Send)]
impl PushChannel for ScriptedChannel {
    async fn next_event(&mut self) -> Option<PushEvent> {
        self.events.pop_front()
    }

    fn describe(&self) -> String {
        format!("scripted:{}", self.label)
    }
}
