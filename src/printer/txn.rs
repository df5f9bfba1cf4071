//! Transaction dispatch for the plain-text printer.
//!
//! Each sub-response is rendered with the same rule used for the standalone
//! command, preceded by a blank line. Only range, put and delete results are
//! understood; anything else (a nested transaction, or an operation shape
//! that was kept as raw JSON) is echoed as a diagnostic line and the loop
//! carries on.

use super::simple::SimplePrinter;
use crate::core::error::PrintResult;
use crate::etcd::{ResponseOp, TxnResponse};
use std::io::Write;

impl<W: Write, E: Write> SimplePrinter<W, E> {
    pub fn txn(&mut self, resp: &TxnResponse) -> PrintResult<()> {
        let outcome = if resp.succeeded { "SUCCESS" } else { "FAILURE" };
        writeln!(self.out, "{}", outcome)?;

        for op in &resp.responses {
            writeln!(self.out)?;
            match op {
                ResponseOp::DeleteRange(r) => self.delete(r)?,
                ResponseOp::Put(r) => self.put(r)?,
                ResponseOp::Range(r) => self.get(r)?,
                other => {
                    tracing::warn!(kind = other.kind(), "unexpected transaction sub-response");
                    writeln!(self.out, "unexpected response {:?}", other)?;
                }
            }
        }
        Ok(())
    }
}
