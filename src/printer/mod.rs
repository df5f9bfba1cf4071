//! Response printers.
//!
//! Every command of the client ends by handing its response to a printer.
//! Responses form a closed set ([`Response`]) so that adding a command forces
//! every printer to handle it.
//!
//! # Architecture
//!
//! ```text
//! Command Handler → Response → Printer::print → stdout / stderr
//!                                  │
//!                  ┌───────────────┼────────────────┐
//!                  │               │                │
//!             KV encoder    Txn dispatcher   Permission ranges
//!           (hex / value)  (re-enters rules)  (prefix detection)
//! ```
//!
//! # Modules
//!
//! - [`encoder`] - key/value rendering, raw or hex
//! - [`perm`] - permission range lines and prefix successor
//! - [`simple`] - the plain-text printer
//! - [`table`] - row builders for member/endpoint listings
//! - `txn` - transaction dispatch for the plain-text printer

pub mod encoder;
pub mod perm;
pub mod simple;
pub mod table;
mod txn;

pub use encoder::{write_kv, FormatterConfig};
pub use perm::{format_range, prefix_range_end};
pub use simple::SimplePrinter;
pub use table::{StandardTables, Table, TableBuilder};

use crate::core::error::{PrintError, PrintResult};
use crate::etcd::{
    AlarmResponse, AuthOpResponse, AuthStatusResponse, DeleteRangeResponse, DowngradeAction,
    DowngradeResponse, EndpointHashKv, EndpointHealth, EndpointStatus, LeaseGrantResponse,
    LeaseId, LeaseKeepAliveResponse, LeaseLeasesResponse, LeaseRevokeResponse,
    LeaseTimeToLiveResponse, MemberAddResponse, MemberChangeResponse, MemberListResponse,
    MoveLeaderResponse, PutResponse, RangeResponse, RoleGetResponse, RoleListResponse,
    TxnResponse, UserGetResponse, UserListResponse, WatchResponse,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format selected with `--write-out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Simple,
    /// JSON documents.
    Json,
    /// ASCII tables.
    Table,
    /// Protobuf text.
    Protobuf,
    /// `"Field" : value` pairs.
    Fields,
}

impl FromStr for OutputFormat {
    type Err = PrintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "protobuf" => Ok(Self::Protobuf),
            "fields" => Ok(Self::Fields),
            _ => Err(PrintError::unsupported_format(s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Protobuf => write!(f, "protobuf"),
            Self::Fields => write!(f, "fields"),
        }
    }
}

/// A command result ready to be printed.
///
/// Variants that need more than the server response (the lease or member ID
/// the command addressed, the role or user name) carry that context inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Response {
    Get(RangeResponse),
    Put(PutResponse),
    Delete(DeleteRangeResponse),
    Txn(TxnResponse),
    Watch(WatchResponse),

    LeaseGrant(LeaseGrantResponse),
    LeaseRevoke {
        id: LeaseId,
        #[serde(default)]
        resp: LeaseRevokeResponse,
    },
    LeaseKeepAlive(LeaseKeepAliveResponse),
    LeaseTimeToLive {
        resp: LeaseTimeToLiveResponse,
        /// Whether the command asked for the attached key list.
        #[serde(default)]
        keys: bool,
    },
    LeaseList(LeaseLeasesResponse),

    Alarm(AlarmResponse),
    MemberAdd(MemberAddResponse),
    MemberRemove {
        id: u64,
        #[serde(default)]
        resp: MemberChangeResponse,
    },
    MemberUpdate {
        id: u64,
        #[serde(default)]
        resp: MemberChangeResponse,
    },
    MemberPromote {
        id: u64,
        #[serde(default)]
        resp: MemberChangeResponse,
    },
    MemberList(MemberListResponse),
    EndpointHealth(Vec<EndpointHealth>),
    EndpointStatus(Vec<EndpointStatus>),
    EndpointHashKv(Vec<EndpointHashKv>),
    MoveLeader {
        leader: u64,
        target: u64,
        #[serde(default)]
        resp: MoveLeaderResponse,
    },
    Downgrade {
        action: DowngradeAction,
        resp: DowngradeResponse,
    },

    RoleAdd {
        role: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    RoleGet {
        role: String,
        #[serde(default)]
        resp: RoleGetResponse,
    },
    RoleList(RoleListResponse),
    RoleDelete {
        role: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    RoleGrantPermission {
        role: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    RoleRevokePermission {
        role: String,
        key: Vec<u8>,
        #[serde(default)]
        range_end: Vec<u8>,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    UserAdd {
        user: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    UserGet {
        user: String,
        #[serde(default)]
        resp: UserGetResponse,
    },
    UserChangePassword(AuthOpResponse),
    UserGrantRole {
        user: String,
        role: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    UserRevokeRole {
        user: String,
        role: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    UserDelete {
        user: String,
        #[serde(default)]
        resp: AuthOpResponse,
    },
    UserList(UserListResponse),
    AuthStatus(AuthStatusResponse),
}

impl Response {
    /// Decode a `{"kind": ..., "body": ...}` JSON document.
    pub fn from_json(content: &str) -> PrintResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Name of the response kind, as used in the JSON `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Get(_) => "get",
            Self::Put(_) => "put",
            Self::Delete(_) => "delete",
            Self::Txn(_) => "txn",
            Self::Watch(_) => "watch",
            Self::LeaseGrant(_) => "lease_grant",
            Self::LeaseRevoke { .. } => "lease_revoke",
            Self::LeaseKeepAlive(_) => "lease_keep_alive",
            Self::LeaseTimeToLive { .. } => "lease_time_to_live",
            Self::LeaseList(_) => "lease_list",
            Self::Alarm(_) => "alarm",
            Self::MemberAdd(_) => "member_add",
            Self::MemberRemove { .. } => "member_remove",
            Self::MemberUpdate { .. } => "member_update",
            Self::MemberPromote { .. } => "member_promote",
            Self::MemberList(_) => "member_list",
            Self::EndpointHealth(_) => "endpoint_health",
            Self::EndpointStatus(_) => "endpoint_status",
            Self::EndpointHashKv(_) => "endpoint_hash_kv",
            Self::MoveLeader { .. } => "move_leader",
            Self::Downgrade { .. } => "downgrade",
            Self::RoleAdd { .. } => "role_add",
            Self::RoleGet { .. } => "role_get",
            Self::RoleList(_) => "role_list",
            Self::RoleDelete { .. } => "role_delete",
            Self::RoleGrantPermission { .. } => "role_grant_permission",
            Self::RoleRevokePermission { .. } => "role_revoke_permission",
            Self::UserAdd { .. } => "user_add",
            Self::UserGet { .. } => "user_get",
            Self::UserChangePassword(_) => "user_change_password",
            Self::UserGrantRole { .. } => "user_grant_role",
            Self::UserRevokeRole { .. } => "user_revoke_role",
            Self::UserDelete { .. } => "user_delete",
            Self::UserList(_) => "user_list",
            Self::AuthStatus(_) => "auth_status",
        }
    }
}

/// A renderer for command results.
pub trait Printer {
    /// Render one response to the printer's sinks.
    fn print(&mut self, response: &Response) -> PrintResult<()>;
}

/// Create the printer for `format` writing to the process's stdout/stderr.
pub fn new_printer(format: OutputFormat, config: FormatterConfig) -> PrintResult<Box<dyn Printer>> {
    match format {
        OutputFormat::Simple => Ok(Box::new(SimplePrinter::stdio(config))),
        other => Err(PrintError::unsupported_format(other.to_string())),
    }
}
