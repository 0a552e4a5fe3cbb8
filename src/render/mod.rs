//! Snapshot → card tree transformation.
//!
//! Pure: no container is touched here. Records are validated one at a time so a single
//! malformed entry only costs its own card.

pub mod card;

use serde_json::Value;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::InstrumentRecord;
use crate::markup::Node;

pub use card::render_card;

/// Outcome of rendering one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// A rendered snapshot ready to be swapped into the grid container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedSnapshot {
    pub cards: Vec<Node>,
    pub report: RenderReport,
}

/// Render every record in received order. Invalid records are logged and skipped.
pub fn render_snapshot(records: Vec<Value>) -> RenderedSnapshot {
    let mut snapshot = RenderedSnapshot {
        cards: Vec::with_capacity(records.len()),
        report: RenderReport::default(),
    };

    for (index, value) in records.into_iter().enumerate() {
        match InstrumentRecord::try_from(value) {
            Ok(record) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_snapshot_records {
                    log::info!("[snapshot] #{} {:?}", index, record);
                }
                snapshot.cards.push(render_card(&record));
                snapshot.report.rendered += 1;
            }
            Err(e) => {
                log::error!("⚠️ Skipping record #{}: {}", index, e);
                snapshot.report.skipped += 1;
            }
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;
    use serde_json::json;

    fn record(symbol: &str, status: u8) -> Value {
        json!({
            "symbol": symbol,
            "price": 1.5,
            "percent_change": -0.5,
            "date_added": "4m 2s",
            "buy_price": 1.25,
            "buy_time": "4m 2s",
            "min_percent": -0.01,
            "min_percent_time": "1m 0s",
            "max_percent": 0.02,
            "max_percent_time": "3m 10s",
            "status": status,
            "status_update_time": "2m 0s"
        })
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        let snapshot = render_snapshot(Vec::new());
        assert!(snapshot.cards.is_empty());
        assert_eq!(snapshot.report, RenderReport::default());
    }

    #[test]
    fn order_is_preserved_without_sorting_or_dedup() {
        let snapshot = render_snapshot(vec![
            record("ETH", 0),
            record("ADA", 2),
            record("ETH", 1),
        ]);
        let headers: Vec<String> = snapshot
            .cards
            .iter()
            .map(|card| card.text_content())
            .map(|text| text.split(" | ").next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(headers, vec!["ETH", "ADA", "ETH"]);
        assert_eq!(snapshot.report.rendered, 3);
    }

    #[test]
    fn malformed_record_is_skipped_and_rest_still_render() {
        let mut broken = record("XRP", 0);
        broken.as_object_mut().unwrap().remove("price");

        let snapshot = render_snapshot(vec![record("ETH", 0), broken, json!(42), record("ADA", 0)]);

        assert_eq!(snapshot.report, RenderReport { rendered: 2, skipped: 2 });
        let html = to_html(&snapshot.cards);
        assert!(html.contains("ETH | $1.50000"));
        assert!(html.contains("ADA | $1.50000"));
        assert!(!html.contains("XRP"));
    }

    #[test]
    fn identical_snapshots_give_identical_markup() {
        let first = to_html(&render_snapshot(vec![record("ETH", 1), record("ADA", 2)]).cards);
        let second = to_html(&render_snapshot(vec![record("ETH", 1), record("ADA", 2)]).cards);
        assert_eq!(first, second);
    }

    #[test]
    fn one_banner_per_status() {
        let snapshot = render_snapshot(vec![record("A", 0), record("B", 1), record("C", 2)]);
        let banners: Vec<usize> = snapshot
            .cards
            .iter()
            .map(|card| card.to_html().matches("limit reached").count())
            .collect();
        assert_eq!(banners, vec![0, 1, 1]);
        assert!(snapshot.cards[1].text_content().ends_with("Min limit reached in 2m 0s"));
        assert!(snapshot.cards[2].text_content().ends_with("Max limit reached in 2m 0s"));
    }
}
