//! Key/value encoding.
//!
//! Keys and values are arbitrary bytes. In the default mode they are written
//! verbatim, control characters included; with `--hex` each byte becomes two
//! lower-case hex digits with no prefix or separator.

use crate::etcd::KeyValue;
use std::borrow::Cow;
use std::io::{self, Write};

/// Encoder settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Render keys and values as hex.
    pub hex_encode: bool,
    /// Suppress the key line.
    pub value_only: bool,
}

impl FormatterConfig {
    /// Config with hex encoding on.
    #[must_use]
    pub fn hex(mut self, hex_encode: bool) -> Self {
        self.hex_encode = hex_encode;
        self
    }

    /// Config with key suppression on.
    #[must_use]
    pub fn value_only(mut self, value_only: bool) -> Self {
        self.value_only = value_only;
        self
    }
}

/// Encode one key or value according to `config`.
pub fn encode_bytes(config: FormatterConfig, bytes: &[u8]) -> Cow<'_, [u8]> {
    if config.hex_encode {
        Cow::Owned(hex::encode(bytes).into_bytes())
    } else {
        Cow::Borrowed(bytes)
    }
}

/// Write `kv` as a key line followed by a value line (value only when
/// `config.value_only` is set).
pub fn write_kv<W: Write>(out: &mut W, config: FormatterConfig, kv: &KeyValue) -> io::Result<()> {
    if !config.value_only {
        out.write_all(&encode_bytes(config, &kv.key))?;
        out.write_all(b"\n")?;
    }
    out.write_all(&encode_bytes(config, &kv.value))?;
    out.write_all(b"\n")
}
