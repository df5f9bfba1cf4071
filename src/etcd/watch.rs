//! etcd watch response shapes.

use super::kv::{KeyValue, ResponseHeader};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Watch event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Key was created or updated.
    #[default]
    Put,
    /// Key was deleted.
    Delete,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single change observed by a watcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type.
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    /// Key-value after the change (key only for deletes).
    #[serde(default)]
    pub kv: KeyValue,
    /// Key-value before the change, when the watcher asked for it.
    #[serde(default)]
    pub prev_kv: Option<KeyValue>,
}

/// Watch response carrying a batch of events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Watch ID the events belong to.
    #[serde(default)]
    pub watch_id: i64,
    /// Events in commit order.
    #[serde(default)]
    pub events: Vec<Event>,
}
