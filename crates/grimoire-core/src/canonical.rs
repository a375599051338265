//! Canonical text encoding for deterministic hashing.
//!
//! Block hashes are computed over the UTF-8 string
//!
//! ```text
//! {index}{timestamp}{previous_hash_hex}{record}
//! ```
//!
//! where `record` is a compact JSON object with a fixed key order:
//!
//! ```text
//! {"architect":A,"mystic":M,"void":V,"divergence":D,"synthesis":S}
//! ```
//!
//! - Keys always appear in this order, with no whitespace.
//! - Strings escape `"`, `\`, and control characters; everything else is
//!   written verbatim (no `\u` escapes for non-ASCII).
//! - Numbers use the shortest decimal that round-trips, never an exponent.
//!   `-0` is written as `0` and non-finite values as `null`.
//!
//! The same record always produces the same bytes, on every platform.

use std::fmt::Write as _;

use crate::digest::Digest;
use crate::record::AnalysisRecord;

/// Record field keys, in encoding order.
mod keys {
    pub const ARCHITECT: &str = "architect";
    pub const MYSTIC: &str = "mystic";
    pub const VOID: &str = "void";
    pub const DIVERGENCE: &str = "divergence";
    pub const SYNTHESIS: &str = "synthesis";
}

/// Encode a record to its canonical string.
pub fn canonical_record(record: &AnalysisRecord) -> String {
    let mut buf = String::with_capacity(
        64 + record.architect.len()
            + record.mystic.len()
            + record.void.len()
            + record.synthesis.len(),
    );

    buf.push('{');
    encode_text_field(&mut buf, keys::ARCHITECT, &record.architect);
    buf.push(',');
    encode_text_field(&mut buf, keys::MYSTIC, &record.mystic);
    buf.push(',');
    encode_text_field(&mut buf, keys::VOID, &record.void);
    buf.push(',');
    encode_text(&mut buf, keys::DIVERGENCE);
    buf.push(':');
    encode_number(&mut buf, record.divergence);
    buf.push(',');
    encode_text_field(&mut buf, keys::SYNTHESIS, &record.synthesis);
    buf.push('}');

    buf
}

/// Build the exact string a block hash is computed over.
pub fn block_hash_input(
    index: u64,
    timestamp: i64,
    previous_hash: &Digest,
    record: &AnalysisRecord,
) -> String {
    let mut buf = String::new();
    // Writing to a String cannot fail.
    let _ = write!(buf, "{}{}{}", index, timestamp, previous_hash.to_hex());
    buf.push_str(&canonical_record(record));
    buf
}

/// Format a number the canonical way.
///
/// Shared with seal derivation so resonance values hash identically
/// everywhere.
pub fn canonical_number(n: f64) -> String {
    let mut buf = String::new();
    encode_number(&mut buf, n);
    buf
}

fn encode_text_field(buf: &mut String, key: &str, value: &str) {
    encode_text(buf, key);
    buf.push(':');
    encode_text(buf, value);
}

/// Encode a quoted, escaped string.
fn encode_text(buf: &mut String, s: &str) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\u{08}' => buf.push_str("\\b"),
            '\u{0c}' => buf.push_str("\\f"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

/// Encode a number: shortest round-trip decimal, no exponent.
fn encode_number(buf: &mut String, n: f64) {
    if !n.is_finite() {
        buf.push_str("null");
    } else if n == 0.0 {
        // Covers -0.0 as well.
        buf.push('0');
    } else {
        let _ = write!(buf, "{}", n);
    }
}
