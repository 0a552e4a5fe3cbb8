use serde_json::Value;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::render::{RenderReport, render_snapshot};
use crate::ui::container::Container;
#[cfg(debug_assertions)]
use crate::utils::app_time;

/// Owns the card grid and redraws it from scratch on every snapshot
pub struct SnapshotRenderer<C: Container> {
    container: C,
    last_report: Option<RenderReport>,
}

impl<C: Container> SnapshotRenderer<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            last_report: None,
        }
    }

    /// Build the card tree for `records` and swap it in, whether or not anything changed.
    /// Failures are logged; nothing escapes to the caller.
    pub fn on_snapshot(&mut self, records: Vec<Value>) -> RenderReport {
        #[cfg(debug_assertions)]
        let started_at = app_time::now();

        let snapshot = render_snapshot(records);

        if let Err(e) = self.container.replace_content(&snapshot.cards) {
            log::error!(
                "⚠️ Failed to replace content of #{}: {:#}",
                self.container.id(),
                e
            );
        }

        if snapshot.report.skipped > 0 {
            log::warn!(
                "Rendered {} cards, skipped {} malformed records",
                snapshot.report.rendered,
                snapshot.report.skipped
            );
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_render_timing {
            log::debug!(
                "[render] {} cards in {:.3}ms",
                snapshot.report.rendered,
                app_time::elapsed_ms(started_at)
            );
        }

        self.last_report = Some(snapshot.report);
        snapshot.report
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn last_report(&self) -> Option<RenderReport> {
        self.last_report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::container::MemoryContainer;
    use serde_json::json;

    fn btc() -> Value {
        json!({
            "symbol": "BTC",
            "price": 50000.12345,
            "percent_change": 1.23,
            "date_added": "2h",
            "buy_price": 49000.5,
            "buy_time": "3h",
            "min_percent": -0.06,
            "min_percent_time": "1h",
            "max_percent": 0.12,
            "max_percent_time": "30m",
            "status": 1,
            "status_update_time": "10m"
        })
    }

    #[test]
    fn each_snapshot_replaces_content_exactly_once() {
        let mut renderer = SnapshotRenderer::new(MemoryContainer::new("data_table"));
        renderer.on_snapshot(vec![btc()]);
        assert_eq!(renderer.container().replacements(), 1);

        let first = renderer.container().html().to_string();
        renderer.on_snapshot(vec![btc()]);
        assert_eq!(renderer.container().replacements(), 2);
        assert_eq!(renderer.container().html(), first);
    }

    #[test]
    fn empty_snapshot_clears_previous_cards() {
        let mut renderer = SnapshotRenderer::new(MemoryContainer::new("data_table"));
        renderer.on_snapshot(vec![btc()]);
        assert!(renderer.container().html().contains("BTC"));

        let report = renderer.on_snapshot(Vec::new());
        assert_eq!(report.rendered, 0);
        assert_eq!(renderer.container().html(), "");
    }

    #[test]
    fn scenario_btc_min_reached() {
        let mut renderer = SnapshotRenderer::new(MemoryContainer::new("data_table"));
        let report = renderer.on_snapshot(vec![btc()]);
        assert_eq!(report, RenderReport { rendered: 1, skipped: 0 });
        assert_eq!(renderer.last_report(), Some(report));

        let html = renderer.container().html();
        assert!(html.contains("BTC | $50000.12345"));
        assert!(html.contains("<span style=\"color:#0dd94e\">1.23</span>"));
        assert!(html.contains("<span style=\"color:red\">Min: -0.0600</span>  (1h ago)"));
        assert!(html.contains("<span style=\"color:#0dd94e\">Max: 0.1200</span>"));
        assert!(html.contains("Min limit reached in 10m"));
    }

    #[test]
    fn record_missing_price_is_dropped_from_grid() {
        let mut broken = btc();
        broken["symbol"] = json!("XRP");
        broken.as_object_mut().unwrap().remove("price");
        let mut eth = btc();
        eth["symbol"] = json!("ETH");

        let mut renderer = SnapshotRenderer::new(MemoryContainer::new("data_table"));
        let report = renderer.on_snapshot(vec![btc(), broken, eth]);

        assert_eq!(report, RenderReport { rendered: 2, skipped: 1 });
        let html = renderer.container().html();
        assert!(html.contains("BTC |"));
        assert!(html.contains("ETH |"));
        assert!(!html.contains("XRP"));
    }

    #[test]
    fn hostile_strings_are_escaped() {
        let mut record = btc();
        record["status_update_time"] = json!("<b onclick=x>10m</b>");
        let mut renderer = SnapshotRenderer::new(MemoryContainer::new("data_table"));
        renderer.on_snapshot(vec![record]);
        let html = renderer.container().html();
        assert!(html.contains("Min limit reached in &lt;b onclick=x&gt;10m&lt;/b&gt;"));
        assert!(!html.contains("<b "));
    }
}
