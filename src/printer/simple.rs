//! Plain-text printer.
//!
//! Writes one or more lines per response to stdout. The only lines written
//! to stderr are failed endpoint health probes. Every literal token here
//! (`OK`, `SUCCESS`, `FAILURE`, `<open ended>`, the 16-digit lease IDs) is
//! relied on by scripts and must not change.

use super::encoder::{write_kv, FormatterConfig};
use super::perm::{format_revoked, write_permissions};
use super::table::{StandardTables, Table, TableBuilder};
use super::{Printer, Response};
use crate::core::error::PrintResult;
use crate::etcd::{
    AlarmResponse, AlarmType, AuthStatusResponse, DeleteRangeResponse, DowngradeAction,
    DowngradeResponse, EndpointHashKv, EndpointHealth, EndpointStatus, LeaseGrantResponse, LeaseId,
    LeaseKeepAliveResponse, LeaseLeasesResponse, LeaseTimeToLiveResponse, MemberAddResponse,
    MemberChangeResponse, MemberListResponse, Permission, PutResponse, RangeResponse,
    RoleGetResponse, RoleListResponse, UserGetResponse, UserListResponse, WatchResponse, ROOT_ROLE,
};
use std::io::{self, Stderr, Stdout, Write};

/// Printer for the default `simple` output format.
pub struct SimplePrinter<W: Write, E: Write> {
    pub(super) config: FormatterConfig,
    pub(super) out: W,
    err: E,
    tables: Box<dyn TableBuilder>,
}

impl SimplePrinter<Stdout, Stderr> {
    /// Printer writing to the process's stdout and stderr.
    pub fn stdio(config: FormatterConfig) -> Self {
        Self::new(config, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> SimplePrinter<W, E> {
    /// Printer writing results to `out` and health failures to `err`.
    pub fn new(config: FormatterConfig, out: W, err: E) -> Self {
        Self {
            config,
            out,
            err,
            tables: Box::new(StandardTables),
        }
    }

    /// Replace the row builder used for member and endpoint listings.
    pub fn with_tables(mut self, tables: impl TableBuilder + 'static) -> Self {
        self.tables = Box::new(tables);
        self
    }

    pub fn config(&self) -> FormatterConfig {
        self.config
    }

    /// Give back the sinks.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    // ------------------------------------------------------------------
    // KV
    // ------------------------------------------------------------------

    pub fn delete(&mut self, resp: &DeleteRangeResponse) -> PrintResult<()> {
        writeln!(self.out, "{}", resp.deleted)?;
        for kv in &resp.prev_kvs {
            write_kv(&mut self.out, self.config, kv)?;
        }
        Ok(())
    }

    pub fn get(&mut self, resp: &RangeResponse) -> PrintResult<()> {
        for kv in &resp.kvs {
            write_kv(&mut self.out, self.config, kv)?;
        }
        Ok(())
    }

    pub fn put(&mut self, resp: &PutResponse) -> PrintResult<()> {
        writeln!(self.out, "OK")?;
        if let Some(ref prev_kv) = resp.prev_kv {
            write_kv(&mut self.out, self.config, prev_kv)?;
        }
        Ok(())
    }

    pub fn watch(&mut self, resp: &WatchResponse) -> PrintResult<()> {
        for event in &resp.events {
            writeln!(self.out, "{}", event.event_type)?;
            if let Some(ref prev_kv) = event.prev_kv {
                write_kv(&mut self.out, self.config, prev_kv)?;
            }
            write_kv(&mut self.out, self.config, &event.kv)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lease
    // ------------------------------------------------------------------

    pub fn lease_grant(&mut self, resp: &LeaseGrantResponse) -> PrintResult<()> {
        writeln!(self.out, "lease {:016x} granted with TTL({}s)", resp.id, resp.ttl)?;
        Ok(())
    }

    pub fn lease_revoke(&mut self, id: LeaseId) -> PrintResult<()> {
        writeln!(self.out, "lease {:016x} revoked", id)?;
        Ok(())
    }

    pub fn lease_keep_alive(&mut self, resp: &LeaseKeepAliveResponse) -> PrintResult<()> {
        writeln!(self.out, "lease {:016x} keepalived with TTL({})", resp.id, resp.ttl)?;
        Ok(())
    }

    /// Attached keys are listed as raw text regardless of `--hex`.
    pub fn lease_time_to_live(
        &mut self,
        resp: &LeaseTimeToLiveResponse,
        keys: bool,
    ) -> PrintResult<()> {
        if resp.is_expired() {
            writeln!(self.out, "lease {:016x} already expired", resp.id)?;
            return Ok(());
        }

        write!(
            self.out,
            "lease {:016x} granted with TTL({}s), remaining({}s)",
            resp.id, resp.granted_ttl, resp.ttl
        )?;
        if keys {
            self.out.write_all(b", attached keys([")?;
            for (i, key) in resp.keys.iter().enumerate() {
                if i > 0 {
                    self.out.write_all(b", ")?;
                }
                self.out.write_all(key)?;
            }
            self.out.write_all(b"])")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn lease_list(&mut self, resp: &LeaseLeasesResponse) -> PrintResult<()> {
        writeln!(self.out, "found {} leases", resp.leases.len())?;
        for lease in &resp.leases {
            writeln!(self.out, "{:016x}", lease.id)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cluster and maintenance
    // ------------------------------------------------------------------

    /// Zero-valued fields are left out, so a member ID of 0 or a `NONE`
    /// alarm produces a shorter (possibly empty) line.
    pub fn alarm(&mut self, resp: &AlarmResponse) -> PrintResult<()> {
        for alarm in &resp.alarms {
            let mut fields = Vec::with_capacity(2);
            if alarm.member_id != 0 {
                fields.push(format!("memberID:{}", alarm.member_id));
            }
            if alarm.alarm != AlarmType::None {
                fields.push(format!("alarm:{}", alarm.alarm));
            }
            writeln!(self.out, "{}", fields.join(" "))?;
        }
        Ok(())
    }

    pub fn member_add(&mut self, resp: &MemberAddResponse) -> PrintResult<()> {
        let as_learner = if resp.member.is_learner {
            " as learner "
        } else {
            " "
        };
        writeln!(
            self.out,
            "Member {:>16x} added{}to cluster {:>16x}",
            resp.member.id, as_learner, resp.header.cluster_id
        )?;
        Ok(())
    }

    pub fn member_remove(&mut self, id: u64, resp: &MemberChangeResponse) -> PrintResult<()> {
        self.member_change(id, "removed from", resp)
    }

    pub fn member_update(&mut self, id: u64, resp: &MemberChangeResponse) -> PrintResult<()> {
        self.member_change(id, "updated in", resp)
    }

    pub fn member_promote(&mut self, id: u64, resp: &MemberChangeResponse) -> PrintResult<()> {
        self.member_change(id, "promoted in", resp)
    }

    fn member_change(
        &mut self,
        id: u64,
        verb: &str,
        resp: &MemberChangeResponse,
    ) -> PrintResult<()> {
        writeln!(self.out, "Member {:>16x} {} cluster {:>16x}", id, verb, resp.header.cluster_id)?;
        Ok(())
    }

    pub fn member_list(&mut self, resp: &MemberListResponse) -> PrintResult<()> {
        let table = self.tables.member_list(resp);
        self.write_rows(&table)
    }

    /// Healthy endpoints go to stdout, unhealthy ones to stderr.
    pub fn endpoint_health(&mut self, health: &[EndpointHealth]) -> PrintResult<()> {
        for h in health {
            if h.error.is_empty() {
                writeln!(
                    self.out,
                    "{} is healthy: successfully committed proposal: took = {:?}",
                    h.ep, h.took
                )?;
            } else {
                writeln!(
                    self.err,
                    "{} is unhealthy: failed to commit proposal: {}",
                    h.ep, h.error
                )?;
            }
        }
        Ok(())
    }

    pub fn endpoint_status(&mut self, statuses: &[EndpointStatus]) -> PrintResult<()> {
        let table = self.tables.endpoint_status(statuses);
        self.write_rows(&table)
    }

    pub fn endpoint_hash_kv(&mut self, hashes: &[EndpointHashKv]) -> PrintResult<()> {
        let table = self.tables.endpoint_hash_kv(hashes);
        self.write_rows(&table)
    }

    fn write_rows(&mut self, table: &Table) -> PrintResult<()> {
        for line in table.lines() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn move_leader(&mut self, leader: u64, target: u64) -> PrintResult<()> {
        writeln!(self.out, "Leadership transferred from {:x} to {:x}", leader, target)?;
        Ok(())
    }

    pub fn downgrade(
        &mut self,
        action: DowngradeAction,
        resp: &DowngradeResponse,
    ) -> PrintResult<()> {
        writeln!(
            self.out,
            "Downgrade {} success, cluster version {}",
            action.as_str(),
            resp.version
        )?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub fn role_add(&mut self, role: &str) -> PrintResult<()> {
        writeln!(self.out, "Role {} created", role)?;
        Ok(())
    }

    /// The root role with no explicit grants is shown as covering every key.
    pub fn role_get(&mut self, role: &str, resp: &RoleGetResponse) -> PrintResult<()> {
        writeln!(self.out, "Role {}", role)?;
        if role == ROOT_ROLE && resp.perm.is_empty() {
            writeln!(self.out, "KV Read:")?;
            writeln!(self.out, "\t[, <open ended>")?;
            writeln!(self.out, "KV Write:")?;
            writeln!(self.out, "\t[, <open ended>")?;
            return Ok(());
        }

        writeln!(self.out, "KV Read:")?;
        write_permissions(&mut self.out, &resp.perm, Permission::grants_read)?;
        writeln!(self.out, "KV Write:")?;
        write_permissions(&mut self.out, &resp.perm, Permission::grants_write)?;
        Ok(())
    }

    pub fn role_list(&mut self, resp: &RoleListResponse) -> PrintResult<()> {
        for role in &resp.roles {
            writeln!(self.out, "{}", role)?;
        }
        Ok(())
    }

    pub fn role_delete(&mut self, role: &str) -> PrintResult<()> {
        writeln!(self.out, "Role {} deleted", role)?;
        Ok(())
    }

    pub fn role_grant_permission(&mut self, role: &str) -> PrintResult<()> {
        writeln!(self.out, "Role {} updated", role)?;
        Ok(())
    }

    pub fn role_revoke_permission(
        &mut self,
        role: &str,
        key: &[u8],
        range_end: &[u8],
    ) -> PrintResult<()> {
        self.out.write_all(&format_revoked(role, key, range_end))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    pub fn user_add(&mut self, user: &str) -> PrintResult<()> {
        writeln!(self.out, "User {} created", user)?;
        Ok(())
    }

    pub fn user_get(&mut self, user: &str, resp: &UserGetResponse) -> PrintResult<()> {
        writeln!(self.out, "User: {}", user)?;
        write!(self.out, "Roles:")?;
        for role in &resp.roles {
            write!(self.out, " {}", role)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn user_change_password(&mut self) -> PrintResult<()> {
        writeln!(self.out, "Password updated")?;
        Ok(())
    }

    pub fn user_grant_role(&mut self, user: &str, role: &str) -> PrintResult<()> {
        writeln!(self.out, "Role {} is granted to user {}", role, user)?;
        Ok(())
    }

    pub fn user_revoke_role(&mut self, user: &str, role: &str) -> PrintResult<()> {
        writeln!(self.out, "Role {} is revoked from user {}", role, user)?;
        Ok(())
    }

    pub fn user_delete(&mut self, user: &str) -> PrintResult<()> {
        writeln!(self.out, "User {} deleted", user)?;
        Ok(())
    }

    pub fn user_list(&mut self, resp: &UserListResponse) -> PrintResult<()> {
        for user in &resp.users {
            writeln!(self.out, "{}", user)?;
        }
        Ok(())
    }

    pub fn auth_status(&mut self, resp: &AuthStatusResponse) -> PrintResult<()> {
        writeln!(self.out, "Authentication Status: {}", resp.enabled)?;
        writeln!(self.out, "AuthRevision: {}", resp.auth_revision)?;
        Ok(())
    }
}

impl<W: Write, E: Write> Printer for SimplePrinter<W, E> {
    fn print(&mut self, response: &Response) -> PrintResult<()> {
        tracing::debug!(kind = response.kind(), "printing response");
        match response {
            Response::Get(resp) => self.get(resp),
            Response::Put(resp) => self.put(resp),
            Response::Delete(resp) => self.delete(resp),
            Response::Txn(resp) => self.txn(resp),
            Response::Watch(resp) => self.watch(resp),
            Response::LeaseGrant(resp) => self.lease_grant(resp),
            Response::LeaseRevoke { id, .. } => self.lease_revoke(*id),
            Response::LeaseKeepAlive(resp) => self.lease_keep_alive(resp),
            Response::LeaseTimeToLive { resp, keys } => self.lease_time_to_live(resp, *keys),
            Response::LeaseList(resp) => self.lease_list(resp),
            Response::Alarm(resp) => self.alarm(resp),
            Response::MemberAdd(resp) => self.member_add(resp),
            Response::MemberRemove { id, resp } => self.member_remove(*id, resp),
            Response::MemberUpdate { id, resp } => self.member_update(*id, resp),
            Response::MemberPromote { id, resp } => self.member_promote(*id, resp),
            Response::MemberList(resp) => self.member_list(resp),
            Response::EndpointHealth(health) => self.endpoint_health(health),
            Response::EndpointStatus(statuses) => self.endpoint_status(statuses),
            Response::EndpointHashKv(hashes) => self.endpoint_hash_kv(hashes),
            Response::MoveLeader { leader, target, .. } => self.move_leader(*leader, *target),
            Response::Downgrade { action, resp } => self.downgrade(*action, resp),
            Response::RoleAdd { role, .. } => self.role_add(role),
            Response::RoleGet { role, resp } => self.role_get(role, resp),
            Response::RoleList(resp) => self.role_list(resp),
            Response::RoleDelete { role, .. } => self.role_delete(role),
            Response::RoleGrantPermission { role, .. } => self.role_grant_permission(role),
            Response::RoleRevokePermission {
                role,
                key,
                range_end,
                ..
            } => self.role_revoke_permission(role, key, range_end),
            Response::UserAdd { user, .. } => self.user_add(user),
            Response::UserGet { user, resp } => self.user_get(user, resp),
            Response::UserChangePassword(_) => self.user_change_password(),
            Response::UserGrantRole { user, role, .. } => self.user_grant_role(user, role),
            Response::UserRevokeRole { user, role, .. } => self.user_revoke_role(user, role),
            Response::UserDelete { user, .. } => self.user_delete(user),
            Response::UserList(resp) => self.user_list(resp),
            Response::AuthStatus(resp) => self.auth_status(resp),
        }
    }
}
