//! Permission range formatting.
//!
//! Role permissions cover either a single key, a half-open range
//! `[key, range_end)`, or everything from `key` onward (range end `"\x00"`).
//! Ranges that are exactly the prefix range of their start key are annotated
//! with `(prefix <key>)`.
//!
//! The open-ended form is written as `[key, <open ended>` with no closing
//! bracket. Scripts parse this output, so it stays as is.

pub use crate::etcd::auth::prefix_range_end;

use crate::etcd::{KeyPermission, Permission};
use std::io::{self, Write};

/// Whether `perm` covers exactly the keys prefixed by its start key.
pub fn is_prefix_range(perm: &KeyPermission) -> bool {
    !perm.key.is_empty() && prefix_range_end(&perm.key).as_deref() == Some(&perm.range_end[..])
}

/// Render a multi-key permission as one line (without trailing newline).
///
/// Single-key entries are printed as the bare key by the caller.
pub fn format_range(perm: &KeyPermission) -> Vec<u8> {
    let mut line = Vec::with_capacity(perm.key.len() * 2 + perm.range_end.len() + 24);
    line.push(b'[');
    line.extend_from_slice(&perm.key);
    if perm.is_open_ended() {
        line.extend_from_slice(b", <open ended>");
    } else {
        line.extend_from_slice(b", ");
        line.extend_from_slice(&perm.range_end);
        line.push(b')');
    }
    if is_prefix_range(perm) {
        line.extend_from_slice(b" (prefix ");
        line.extend_from_slice(&perm.key);
        line.push(b')');
    }
    line
}

/// Write every entry whose type satisfies `grants`, one tab-indented line each.
pub fn write_permissions<W: Write>(
    out: &mut W,
    perms: &[KeyPermission],
    grants: impl Fn(Permission) -> bool,
) -> io::Result<()> {
    for perm in perms.iter().filter(|p| grants(p.perm_type)) {
        out.write_all(b"\t")?;
        if perm.is_single_key() {
            out.write_all(&perm.key)?;
        } else {
            out.write_all(&format_range(perm))?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Confirmation line for a revoked permission (without trailing newline).
pub fn format_revoked(role: &str, key: &[u8], range_end: &[u8]) -> Vec<u8> {
    let mut line = Vec::new();
    if range_end.is_empty() {
        line.extend_from_slice(b"Permission of key ");
        line.extend_from_slice(key);
    } else {
        line.extend_from_slice(b"Permission of range [");
        line.extend_from_slice(key);
        if range_end == crate::etcd::OPEN_ENDED {
            line.extend_from_slice(b", <open ended>");
        } else {
            line.extend_from_slice(b", ");
            line.extend_from_slice(range_end);
            line.push(b')');
        }
    }
    line.extend_from_slice(b" is revoked from role ");
    line.extend_from_slice(role.as_bytes());
    line
}
