use serde_json::Value;

use crate::config::CONNECTION;

/// An inbound push event, already routed by name
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// Full snapshot: every tracked instrument, in producer order
    UpdateRecords(Vec<Value>),
    /// Server-formatted "last update" text
    LastUpdate(String),
    /// A known event whose payload has the wrong shape
    Rejected { name: String, reason: String },
    /// Any event this board does not subscribe to
    Other { name: String },
}

impl PushEvent {
    /// Route a named payload to the matching event
    pub fn from_named(name: &str, payload: Value) -> PushEvent {
        if name == CONNECTION.events.snapshot {
            match payload {
                Value::Array(records) => PushEvent::UpdateRecords(records),
                other => PushEvent::Rejected {
                    name: name.to_string(),
                    reason: format!("expected an array of records, got {}", kind_of(&other)),
                },
            }
        } else if name == CONNECTION.events.timestamp {
            match payload {
                Value::String(text) => PushEvent::LastUpdate(text),
                other => PushEvent::Rejected {
                    name: name.to_string(),
                    reason: format!("expected a string, got {}", kind_of(&other)),
                },
            }
        } else {
            PushEvent::Other {
                name: name.to_string(),
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PushEvent::UpdateRecords(_) => CONNECTION.events.snapshot,
            PushEvent::LastUpdate(_) => CONNECTION.events.timestamp,
            PushEvent::Rejected { name, .. } | PushEvent::Other { name } => name.as_str(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
