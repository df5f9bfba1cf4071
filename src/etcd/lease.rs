//! etcd lease response shapes.
//!
//! Grant, revoke, keepalive, time-to-live and listing results.

use super::kv::ResponseHeader;
use serde::{Deserialize, Serialize};

/// Lease identifier as assigned by the server.
pub type LeaseId = u64;

/// Remaining TTL reported for a lease the server no longer knows about.
pub const EXPIRED_TTL: i64 = -1;

/// Lease grant response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseGrantResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Assigned lease ID.
    pub id: LeaseId,
    /// Granted TTL in seconds.
    pub ttl: i64,
    /// Error message (if any).
    #[serde(default)]
    pub error: String,
}

/// Lease revoke response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseRevokeResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
}

/// Lease keepalive response (stream message).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseKeepAliveResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Lease ID.
    pub id: LeaseId,
    /// Remaining TTL in seconds.
    pub ttl: i64,
}

/// Lease time-to-live response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTimeToLiveResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Lease ID.
    pub id: LeaseId,
    /// Remaining TTL in seconds, [`EXPIRED_TTL`] once the lease is gone.
    pub ttl: i64,
    /// Granted TTL in seconds.
    pub granted_ttl: i64,
    /// Attached keys (if requested).
    #[serde(default)]
    pub keys: Vec<Vec<u8>>,
}

impl LeaseTimeToLiveResponse {
    /// A lease the server has already expired reports no granted TTL and
    /// the expired sentinel as its remaining TTL.
    pub fn is_expired(&self) -> bool {
        self.granted_ttl == 0 && self.ttl == EXPIRED_TTL
    }
}

/// Lease status (for listing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseStatus {
    /// Lease ID.
    pub id: LeaseId,
}

/// Lease leases response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseLeasesResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// List of active leases.
    #[serde(default)]
    pub leases: Vec<LeaseStatus>,
}
