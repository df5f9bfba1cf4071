//! etcd maintenance response shapes.
//!
//! Alarms, per-endpoint status and hash results, and the endpoint health
//! probe results assembled by the client before printing.

use super::kv::ResponseHeader;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Alarm type raised by a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmType {
    #[default]
    None,
    /// Backend quota exhausted.
    Nospace,
    /// Data corruption detected.
    Corrupt,
}

impl fmt::Display for AlarmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Nospace => write!(f, "NOSPACE"),
            Self::Corrupt => write!(f, "CORRUPT"),
        }
    }
}

/// An alarm raised by one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmMember {
    /// Member that raised the alarm.
    pub member_id: u64,
    /// Alarm type.
    pub alarm: AlarmType,
}

/// Alarm list/disarm response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Active alarms.
    #[serde(default)]
    pub alarms: Vec<AlarmMember>,
}

/// Health probe result for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointHealth {
    /// Endpoint address.
    pub ep: String,
    /// Whether the probe succeeded.
    #[serde(default)]
    pub health: bool,
    /// Time taken to commit the probe proposal.
    #[serde(default)]
    pub took: Duration,
    /// Failure text; empty when healthy.
    #[serde(default)]
    pub error: String,
}

impl EndpointHealth {
    /// Probe result for a healthy endpoint.
    pub fn healthy(ep: impl Into<String>, took: Duration) -> Self {
        Self {
            ep: ep.into(),
            health: true,
            took,
            error: String::new(),
        }
    }

    /// Probe result for an endpoint that failed with `error`.
    pub fn unhealthy(ep: impl Into<String>, took: Duration, error: impl Into<String>) -> Self {
        Self {
            ep: ep.into(),
            health: false,
            took,
            error: error.into(),
        }
    }
}

/// Maintenance status of a single member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Server version.
    #[serde(default)]
    pub version: String,
    /// Backend size in bytes.
    #[serde(default)]
    pub db_size: i64,
    /// Backend bytes in use.
    #[serde(default)]
    pub db_size_in_use: i64,
    /// Current leader member ID.
    #[serde(default)]
    pub leader: u64,
    /// Raft index.
    #[serde(default)]
    pub raft_index: u64,
    /// Raft term.
    #[serde(default)]
    pub raft_term: u64,
    /// Raft applied index.
    #[serde(default)]
    pub raft_applied_index: u64,
    /// Errors reported by the member.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Non-voting member.
    #[serde(default)]
    pub is_learner: bool,
}

/// Status of one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointStatus {
    /// Endpoint address.
    pub ep: String,
    /// Status reported by that endpoint.
    pub resp: StatusResponse,
}

/// KV hash of a single member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashKvResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Hash of the keyspace up to `hash_revision`.
    pub hash: u32,
    /// Compacted revision at hash time.
    #[serde(default)]
    pub compact_revision: i64,
    /// Revision the hash was computed at.
    #[serde(default)]
    pub hash_revision: i64,
}

/// KV hash of one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointHashKv {
    /// Endpoint address.
    pub ep: String,
    /// Hash reported by that endpoint.
    pub resp: HashKvResponse,
}
