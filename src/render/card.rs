use crate::config::BOARD;
use crate::domain::{InstrumentRecord, Status};
use crate::markup::{Element, Node};
use crate::utils::format::{ago, fixed, price};

/// Colour for the headline percent change: gains (including exactly zero) vs losses
pub fn change_color(percent_change: f64) -> &'static str {
    if percent_change >= 0.0 {
        BOARD.colors.positive
    } else {
        BOARD.colors.negative
    }
}

/// Min line is only highlighted once the stop-loss level is reached
pub fn min_color(min_percent: f64) -> Option<&'static str> {
    (min_percent <= BOARD.thresholds.min_percent_limit).then_some(BOARD.colors.negative)
}

/// Max line is only highlighted once the take-profit level is reached
pub fn max_color(max_percent: f64) -> Option<&'static str> {
    (max_percent >= BOARD.thresholds.max_percent_limit).then_some(BOARD.colors.positive)
}

/// Build the card for one instrument
pub fn render_card(record: &InstrumentRecord) -> Node {
    let mut card = Element::new("div")
        .class(BOARD.classes.card)
        .child(content(record));

    if let Some(banner) = status_banner(record.status, &record.status_update_time) {
        card = card.child(banner);
    }

    card.into()
}

fn content(record: &InstrumentRecord) -> Element {
    let header = Element::new("div")
        .class(BOARD.classes.header)
        .text(format!("{} | {} | ", record.symbol, price(record.price)))
        .child(
            Element::new("span")
                .color(Some(change_color(record.percent_change)))
                .text(fixed(record.percent_change, BOARD.digits.percent_change)),
        );

    let meta = Element::new("div")
        .class(BOARD.classes.meta)
        .text(format!("Added: {}", ago(&record.date_added)))
        .child(Element::new("br"))
        .text(format!(
            "Purchased: {} ({})",
            price(record.buy_price),
            ago(&record.buy_time)
        ));

    let description = Element::new("div")
        .class(BOARD.classes.description)
        .child(extreme_line(
            "Min",
            record.min_percent,
            min_color(record.min_percent),
            &record.min_percent_time,
        ))
        .child(extreme_line(
            "Max",
            record.max_percent,
            max_color(record.max_percent),
            &record.max_percent_time,
        ));

    Element::new("div")
        .class(BOARD.classes.content)
        .child(header)
        .child(meta)
        .child(description)
}

fn extreme_line(label: &str, value: f64, color: Option<&str>, elapsed: &str) -> Element {
    Element::new("p")
        .child(
            Element::new("span")
                .color(color)
                .text(format!("{}: {}", label, fixed(value, BOARD.digits.min_max_percent))),
        )
        .text(format!("  ({})", ago(elapsed)))
}

/// At most one banner per card; Normal has none
pub fn status_banner(status: Status, status_update_time: &str) -> Option<Element> {
    let (icon, label) = match status {
        Status::Normal => return None,
        Status::MinReached => (BOARD.classes.min_icon, "Min"),
        Status::MaxReached => (BOARD.classes.max_icon, "Max"),
    };
    Some(
        Element::new("div")
            .class(BOARD.classes.banner)
            .child(Element::new("i").class(icon))
            .text(format!("{} limit reached in {}", label, status_update_time)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> InstrumentRecord {
        InstrumentRecord {
            symbol: "BTC".to_string(),
            price: 50000.12345,
            percent_change: 1.23,
            date_added: "2h".to_string(),
            buy_price: 49000.5,
            buy_time: "3h".to_string(),
            min_percent: -0.06,
            min_percent_time: "1h".to_string(),
            max_percent: 0.12,
            max_percent_time: "30m".to_string(),
            status: Status::MinReached,
            status_update_time: "10m".to_string(),
        }
    }

    #[test]
    fn btc_card_matches_expected_markup() {
        let html = render_card(&btc()).to_html();
        assert_eq!(
            html,
            concat!(
                "<div class=\"ui centered card\">",
                "<div class=\"content\">",
                "<div class=\"header\">BTC | $50000.12345 | <span style=\"color:#0dd94e\">1.23</span></div>",
                "<div class=\"meta\">Added: 2h ago<br>Purchased: $49000.50000 (3h ago)</div>",
                "<div class=\"description\">",
                "<p><span style=\"color:red\">Min: -0.0600</span>  (1h ago)</p>",
                "<p><span style=\"color:#0dd94e\">Max: 0.1200</span>  (30m ago)</p>",
                "</div>",
                "</div>",
                "<div class=\"extra content\"><i class=\"times icon\"></i>Min limit reached in 10m</div>",
                "</div>"
            )
        );
    }

    #[test]
    fn change_color_boundary() {
        assert_eq!(change_color(0.0), BOARD.colors.positive);
        assert_eq!(change_color(-0.0), BOARD.colors.positive);
        assert_eq!(change_color(-0.0001), BOARD.colors.negative);
    }

    #[test]
    fn min_threshold_boundary() {
        assert_eq!(min_color(-0.05), Some(BOARD.colors.negative));
        assert_eq!(min_color(-0.0501), Some(BOARD.colors.negative));
        assert_eq!(min_color(-0.0499), None);
    }

    #[test]
    fn max_threshold_boundary() {
        assert_eq!(max_color(0.10), Some(BOARD.colors.positive));
        assert_eq!(max_color(0.0999), None);
    }

    #[test]
    fn tiny_negative_change_keeps_sign_and_red_accent() {
        let mut record = btc();
        record.percent_change = -0.0001;
        let html = render_card(&record).to_html();
        assert!(html.contains("<span style=\"color:red\">-0.00</span>"));
    }

    #[test]
    fn banner_follows_status() {
        assert!(status_banner(Status::Normal, "5m").is_none());

        let min = Node::from(status_banner(Status::MinReached, "5m").unwrap());
        assert_eq!(min.text_content(), "Min limit reached in 5m");
        assert!(min.to_html().contains("times icon"));

        let max = Node::from(status_banner(Status::MaxReached, "1h 2m 3s").unwrap());
        assert_eq!(max.text_content(), "Max limit reached in 1h 2m 3s");
        assert!(max.to_html().contains("star icon"));
    }

    #[test]
    fn normal_card_has_no_banner() {
        let mut record = btc();
        record.status = Status::Normal;
        let html = render_card(&record).to_html();
        assert!(!html.contains("extra content"));
        assert!(!html.contains("limit reached"));
    }
}
