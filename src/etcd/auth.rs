//! etcd auth response shapes.
//!
//! Role and user administration results plus the permission entries a role
//! carries. Role and user names are plain strings; permission keys are bytes.

use super::kv::ResponseHeader;
use serde::{Deserialize, Serialize};

/// Name of the built-in superuser role.
pub const ROOT_ROLE: &str = "root";

/// Range end marking a permission with no upper bound.
pub const OPEN_ENDED: &[u8] = b"\x00";

/// Smallest key greater than every key that starts with `key`.
///
/// Increments the last byte that is not `0xff` and drops everything after
/// it. Returns `None` when no such key exists (empty or all-`0xff` input).
pub fn prefix_range_end(key: &[u8]) -> Option<Vec<u8>> {
    let last = key.iter().rposition(|&b| b < 0xff)?;
    let mut end = key[..=last].to_vec();
    end[last] += 1;
    Some(end)
}

/// Permission type for key operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Read permission (Range, Watch).
    Read,
    /// Write permission (Put, Delete).
    Write,
    /// Read and write permission.
    ReadWrite,
}

impl Permission {
    /// Whether this permission allows reads.
    pub fn grants_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Whether this permission allows writes.
    pub fn grants_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// Key permission entry attached to a role.
///
/// `range_end` follows the etcd convention: empty for a single key,
/// [`OPEN_ENDED`] for "every key from `key` onward", otherwise an exclusive
/// upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPermission {
    /// First key covered.
    pub key: Vec<u8>,
    /// Range end (see type docs).
    #[serde(default)]
    pub range_end: Vec<u8>,
    /// Permission type.
    pub perm_type: Permission,
}

impl KeyPermission {
    /// Create an exact key permission.
    pub fn exact(key: impl Into<Vec<u8>>, perm_type: Permission) -> Self {
        Self {
            key: key.into(),
            range_end: Vec::new(),
            perm_type,
        }
    }

    /// Create a range permission.
    pub fn range(
        key: impl Into<Vec<u8>>,
        range_end: impl Into<Vec<u8>>,
        perm_type: Permission,
    ) -> Self {
        Self {
            key: key.into(),
            range_end: range_end.into(),
            perm_type,
        }
    }

    /// Create a permission covering every key that starts with `prefix`.
    ///
    /// A prefix with no bounded successor (all `0xff`) becomes open ended.
    pub fn prefix(prefix: impl Into<Vec<u8>>, perm_type: Permission) -> Self {
        let key = prefix.into();
        let range_end = prefix_range_end(&key).unwrap_or_else(|| OPEN_ENDED.to_vec());
        Self {
            key,
            range_end,
            perm_type,
        }
    }

    /// Create a permission from `key` onward with no upper bound.
    pub fn from_key(key: impl Into<Vec<u8>>, perm_type: Permission) -> Self {
        Self::range(key, OPEN_ENDED, perm_type)
    }

    /// Whether this entry grants a single key rather than a range.
    pub fn is_single_key(&self) -> bool {
        self.range_end.is_empty()
    }

    /// Whether this entry has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        self.range_end == OPEN_ENDED
    }
}

/// Response for role/user mutations that carry nothing but a header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOpResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
}

/// Role get response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGetResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Permissions granted to the role, in grant order.
    #[serde(default)]
    pub perm: Vec<KeyPermission>,
}

/// Role list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleListResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Role names.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// User get response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGetResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Roles granted to the user.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// User list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// User names.
    #[serde(default)]
    pub users: Vec<String>,
}

/// Auth status response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    /// Response header.
    #[serde(default)]
    pub header: ResponseHeader,
    /// Whether authentication is enabled.
    pub enabled: bool,
    /// Current auth store revision.
    #[serde(default)]
    pub auth_revision: u64,
}
