//! etcd transaction response shapes.
//!
//! A transaction result carries one tagged sub-response per executed
//! operation, in the order the operations were submitted.

use super::kv::{DeleteRangeResponse, PutResponse, RangeResponse, ResponseHeader};
use serde::{Deserialize, Serialize};

/// Response operation from a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseOp {
    /// Range response.
    Range(RangeResponse),
    /// Put response.
    Put(PutResponse),
    /// Delete response.
    DeleteRange(DeleteRangeResponse),
    /// Nested transaction response.
    Txn(TxnResponse),
    /// Any other shape, kept as received. Covers operation kinds this crate
    /// does not model and empty operations.
    #[serde(untagged)]
    Unknown(serde_json::Value),
}

impl ResponseOp {
    /// Short tag naming the operation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Range(_) => "range",
            Self::Put(_) => "put",
            Self::DeleteRange(_) => "delete_range",
            Self::Txn(_) => "txn",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Transaction response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Whether the compare succeeded.
    pub succeeded: bool,
    /// Responses from executed operations.
    #[serde(default)]
    pub responses: Vec<ResponseOp>,
}

impl TxnResponse {
    /// Create a new transaction response.
    pub fn new(header: ResponseHeader, succeeded: bool, responses: Vec<ResponseOp>) -> Self {
        Self {
            header,
            succeeded,
            responses,
        }
    }
}
