use crate::config::BOARD;

/// Fixed-point formatting with exactly `places` fractional digits.
/// Negative zero prints unsigned; a negative value that only rounds to zero keeps its sign.
pub fn fixed(value: f64, places: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", places, value)
}

/// Price with the currency marker, e.g. "$50000.12345"
pub fn price(value: f64) -> String {
    format!("{}{}", BOARD.currency_marker, fixed(value, BOARD.digits.price))
}

/// Elapsed-time string with the "ago" suffix, e.g. "2h ago"
pub fn ago(elapsed: &str) -> String {
    format!("{} {}", elapsed, BOARD.ago_suffix)
}
