use std::error::Error;
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Threshold state computed by the producer for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Normal,
    MinReached,
    MaxReached,
}

impl Status {
    /// Map a wire code to a status. Integral floats (`1.0`) are accepted,
    /// anything outside {0, 1, 2} is unknown.
    pub fn from_code(code: f64) -> Option<Status> {
        if code.fract() != 0.0 {
            return None;
        }
        match code as i64 {
            0 => Some(Status::Normal),
            1 => Some(Status::MinReached),
            2 => Some(Status::MaxReached),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = f64::deserialize(deserializer)?;
        Ok(Status::from_code(code).unwrap_or_else(|| {
            log::warn!("⚠️ Unknown status code {} treated as Normal", code);
            Status::Normal
        }))
    }
}

/// One tracked asset as pushed by the producer.
/// The `*_time` / `date_added` fields are pre-formatted elapsed-time strings ("1h 5m 3s").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstrumentRecord {
    pub symbol: String,
    pub price: f64,
    pub percent_change: f64,
    pub date_added: String,
    pub buy_price: f64,
    pub buy_time: String,
    pub min_percent: f64,
    pub min_percent_time: String,
    pub max_percent: f64,
    pub max_percent_time: String,
    pub status: Status,
    pub status_update_time: String,
}

/// A record that failed schema validation and was left out of the render
#[derive(Debug)]
pub enum RecordError {
    NotAnObject,
    Invalid {
        symbol: Option<String>,
        source: serde_json::Error,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordError::NotAnObject => write!(f, "record is not a JSON object"),
            RecordError::Invalid {
                symbol: Some(symbol),
                source,
            } => write!(f, "invalid record for {}: {}", symbol, source),
            RecordError::Invalid {
                symbol: None,
                source,
            } => write!(f, "invalid record (no symbol): {}", source),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordError::NotAnObject => None,
            RecordError::Invalid { source, .. } => Some(source),
        }
    }
}

impl TryFrom<Value> for InstrumentRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        // Grab the symbol up front so a rejected record can still be named in the log
        let symbol = value
            .get("symbol")
            .and_then(Value::as_str)
            .map(str::to_string);
        serde_json::from_value(value).map_err(|source| RecordError::Invalid { symbol, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn valid_record_decodes() {
        let record = InstrumentRecord::try_from(btc()).unwrap();
        assert_eq!(record.symbol, "BTC");
        assert_eq!(record.status, Status::MinReached);
        assert_eq!(record.status_update_time, "10m");
    }

    #[test]
    fn integer_prices_and_float_status_are_accepted() {
        let mut value = btc();
        value["price"] = json!(50000);
        value["status"] = json!(2.0);
        let record = InstrumentRecord::try_from(value).unwrap();
        assert_eq!(record.price, 50000.0);
        assert_eq!(record.status, Status::MaxReached);
    }

    #[test]
    fn unknown_status_falls_back_to_normal() {
        for code in [json!(3), json!(-1), json!(1.5)] {
            let mut value = btc();
            value["status"] = code;
            let record = InstrumentRecord::try_from(value).unwrap();
            assert_eq!(record.status, Status::Normal);
        }
    }

    #[test]
    fn missing_price_is_rejected_with_symbol() {
        let mut value = btc();
        value.as_object_mut().unwrap().remove("price");
        match InstrumentRecord::try_from(value) {
            Err(RecordError::Invalid { symbol, source }) => {
                assert_eq!(symbol.as_deref(), Some("BTC"));
                assert!(source.to_string().contains("price"));
            }
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut value = btc();
        value["price"] = json!("50000.1");
        assert!(InstrumentRecord::try_from(value).is_err());

        let mut value = btc();
        value["status"] = json!("1");
        assert!(InstrumentRecord::try_from(value).is_err());

        let mut value = btc();
        value["buy_time"] = Value::Null;
        assert!(InstrumentRecord::try_from(value).is_err());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            InstrumentRecord::try_from(json!([1, 2, 3])),
            Err(RecordError::NotAnObject)
        ));
    }
}
