//! etcd cluster membership response shapes.

use super::kv::ResponseHeader;
use serde::{Deserialize, Serialize};

/// A cluster member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member ID.
    pub id: u64,
    /// Human-readable name; empty until the member has started.
    #[serde(default)]
    pub name: String,
    /// URLs used for peer traffic.
    #[serde(default)]
    pub peer_urls: Vec<String>,
    /// URLs used for client traffic.
    #[serde(default)]
    pub client_urls: Vec<String>,
    /// Non-voting member.
    #[serde(default)]
    pub is_learner: bool,
}

impl Member {
    /// A member that has never started has not yet published its name.
    pub fn is_started(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Member add response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAddResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// The member that was added.
    pub member: Member,
    /// Membership after the change.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Response for membership changes addressed by member ID
/// (remove, update, promote).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChangeResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Membership after the change.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Member list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberListResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Current members.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// Move-leader response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLeaderResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
}

/// Downgrade action requested of the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DowngradeAction {
    /// Check whether a downgrade to the target version is possible.
    Validate,
    /// Start the downgrade.
    Enable,
    /// Abort an in-flight downgrade.
    Cancel,
}

impl DowngradeAction {
    /// Verb used in operator-facing messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Enable => "enable",
            Self::Cancel => "cancel",
        }
    }
}

/// Downgrade response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowngradeResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Cluster version after the action.
    pub version: String,
}
