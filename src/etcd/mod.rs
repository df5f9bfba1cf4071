//! etcd v3 response shapes consumed by the printers.
//!
//! These types mirror what the etcd v3 client returns for each command. They
//! are plain data: the printers read them and never mutate them.
//!
//! # Modules
//!
//! - [`kv`] - Range, Put, Delete responses
//! - [`txn`] - Transaction responses and tagged sub-responses
//! - [`watch`] - Watch events
//! - [`lease`] - Lease grant/revoke/keepalive/TTL/list responses
//! - [`auth`] - Role and user administration, permissions
//! - [`cluster`] - Membership, leadership and downgrade responses
//! - [`maintenance`] - Alarms, endpoint health/status/hash

pub mod auth;
pub mod cluster;
pub mod kv;
pub mod lease;
pub mod maintenance;
pub mod txn;
pub mod watch;

// Re-export commonly used types
pub use auth::{
    AuthOpResponse, AuthStatusResponse, KeyPermission, Permission, RoleGetResponse,
    RoleListResponse, UserGetResponse, UserListResponse, OPEN_ENDED, ROOT_ROLE,
};
pub use auth::prefix_range_end;
pub use cluster::{
    DowngradeAction, DowngradeResponse, Member, MemberAddResponse, MemberChangeResponse,
    MemberListResponse, MoveLeaderResponse,
};
pub use kv::{DeleteRangeResponse, KeyValue, PutResponse, RangeResponse, ResponseHeader};
pub use lease::{
    LeaseGrantResponse, LeaseId, LeaseKeepAliveResponse, LeaseLeasesResponse,
    LeaseRevokeResponse, LeaseStatus, LeaseTimeToLiveResponse, EXPIRED_TTL,
};
pub use maintenance::{
    AlarmMember, AlarmResponse, AlarmType, EndpointHashKv, EndpointHealth, EndpointStatus,
    HashKvResponse, StatusResponse,
};
pub use txn::{ResponseOp, TxnResponse};
pub use watch::{Event, EventType, WatchResponse};
