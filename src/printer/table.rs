//! Row builders for member and endpoint listings.
//!
//! Table-producing renderers need a header and aligned columns; the
//! plain-text printer only flattens rows into `", "`-joined lines. Both sit
//! on the same [`TableBuilder`] so the cell contents never diverge.

use crate::etcd::{EndpointHashKv, EndpointStatus, MemberListResponse};

/// Header plus rows of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows flattened into `", "`-joined lines, in row order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.join(", "))
    }
}

/// Builds the rows shown for listing responses.
pub trait TableBuilder {
    fn member_list(&self, resp: &MemberListResponse) -> Table;
    fn endpoint_status(&self, statuses: &[EndpointStatus]) -> Table;
    fn endpoint_hash_kv(&self, hashes: &[EndpointHashKv]) -> Table;
}

/// Column layout used by the stock client.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTables;

impl TableBuilder for StandardTables {
    fn member_list(&self, resp: &MemberListResponse) -> Table {
        let mut table = Table::new(&[
            "ID",
            "STATUS",
            "NAME",
            "PEER ADDRS",
            "CLIENT ADDRS",
            "IS LEARNER",
        ]);
        for m in &resp.members {
            let status = if m.is_started() { "started" } else { "unstarted" };
            table.rows.push(vec![
                format!("{:x}", m.id),
                status.to_string(),
                m.name.clone(),
                m.peer_urls.join(","),
                m.client_urls.join(","),
                m.is_learner.to_string(),
            ]);
        }
        table
    }

    fn endpoint_status(&self, statuses: &[EndpointStatus]) -> Table {
        let mut table = Table::new(&[
            "ENDPOINT",
            "ID",
            "VERSION",
            "DB SIZE",
            "IS LEADER",
            "IS LEARNER",
            "RAFT TERM",
            "RAFT INDEX",
            "RAFT APPLIED INDEX",
            "ERRORS",
        ]);
        for status in statuses {
            let resp = &status.resp;
            table.rows.push(vec![
                status.ep.clone(),
                format!("{:x}", resp.header.member_id),
                resp.version.clone(),
                humanize_bytes(resp.db_size.max(0) as u64),
                (resp.leader == resp.header.member_id).to_string(),
                resp.is_learner.to_string(),
                resp.raft_term.to_string(),
                resp.raft_index.to_string(),
                resp.raft_applied_index.to_string(),
                resp.errors.join(", "),
            ]);
        }
        table
    }

    fn endpoint_hash_kv(&self, hashes: &[EndpointHashKv]) -> Table {
        let mut table = Table::new(&["ENDPOINT", "HASH", "HASH REVISION", "COMPACT REVISION"]);
        for hash in hashes {
            table.rows.push(vec![
                hash.ep.clone(),
                hash.resp.hash.to_string(),
                hash.resp.hash_revision.to_string(),
                hash.resp.compact_revision.to_string(),
            ]);
        }
        table
    }
}

const SI_SIZES: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Byte count in SI units, one decimal below 10 (`"2.4 MB"`, `"25 MB"`).
pub fn humanize_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }
    let mut exp = 0;
    let mut scale = 1u64;
    while exp + 1 < SI_SIZES.len() && bytes / scale >= 1000 {
        scale *= 1000;
        exp += 1;
    }
    let val = ((bytes as f64 / scale as f64) * 10.0 + 0.5).floor() / 10.0;
    if val < 10.0 {
        format!("{:.1} {}", val, SI_SIZES[exp])
    } else {
        format!("{:.0} {}", val, SI_SIZES[exp])
    }
}
