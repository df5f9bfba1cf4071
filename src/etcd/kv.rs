//! etcd KV response shapes.
//!
//! Range (Get), Put and DeleteRange results as returned by the client layer.
//! Keys and values are raw bytes and are never assumed to be UTF-8.

use serde::{Deserialize, Serialize};

/// Response header included in all etcd responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Cluster ID.
    #[serde(default)]
    pub cluster_id: u64,
    /// Member ID.
    #[serde(default)]
    pub member_id: u64,
    /// Revision at which the operation was performed.
    #[serde(default)]
    pub revision: i64,
    /// Raft term.
    #[serde(default)]
    pub raft_term: u64,
}

/// Key-value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Key.
    pub key: Vec<u8>,
    /// Revision when created.
    #[serde(default)]
    pub create_revision: i64,
    /// Revision of last modification.
    #[serde(default)]
    pub mod_revision: i64,
    /// Version (number of modifications).
    #[serde(default)]
    pub version: i64,
    /// Value.
    #[serde(default)]
    pub value: Vec<u8>,
    /// Attached lease ID.
    #[serde(default)]
    pub lease: i64,
}

impl KeyValue {
    /// Create a key-value pair with zeroed revision metadata.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Range response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Key-value pairs, in the order the server returned them.
    #[serde(default)]
    pub kvs: Vec<KeyValue>,
    /// More results available (pagination).
    #[serde(default)]
    pub more: bool,
    /// Total count of keys matching the range.
    #[serde(default)]
    pub count: i64,
}

/// Put response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Previous key-value (if requested).
    #[serde(default)]
    pub prev_kv: Option<KeyValue>,
}

/// Delete response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRangeResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Number of keys deleted.
    #[serde(default)]
    pub deleted: i64,
    /// Previous key-values (if requested).
    #[serde(default)]
    pub prev_kvs: Vec<KeyValue>,
}
