#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::ui::container::Container;

/// Owns the "last update" label. Last string wins; no history.
pub struct StatusLabelUpdater<C: Container> {
    container: C,
}

impl<C: Container> StatusLabelUpdater<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    /// Show `text` verbatim, as literal text
    pub fn on_timestamp(&mut self, text: &str) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_label_updates {
            log::info!("[label] #{} <- {:?}", self.container.id(), text);
        }

        if let Err(e) = self.container.replace_text(text) {
            log::error!(
                "⚠️ Failed to update label #{}: {:#}",
                self.container.id(),
                e
            );
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}
