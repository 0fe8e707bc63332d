// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary buffer parsing.
//!
//! The input format is deliberately dumb: newline-delimited records, each
//! optionally split on its first tab into key and value. No escaping, no
//! quoting, no comments. Anything that cannot yield a non-empty key is
//! dropped on the floor - parsing never fails, it just produces fewer
//! entries. An empty buffer parses to an empty entry list and an always-miss
//! set, which is a feature: callers can feed user-supplied dictionaries
//! without a validation pass.

use crate::types::Entry;

/// Split a dictionary buffer into entries.
///
/// Records are separated by `0x0A`. Within a record, the first `0x09` (if
/// any) separates key from value; later tabs belong to the value. A record
/// with no tab has `value = None`; a record ending in a tab has an explicitly
/// empty value, which is a different thing. Empty keys are dropped silently.
///
/// Duplicate keys survive this pass in buffer order; the tree builder
/// resolves them last-wins.
pub(crate) fn parse_entries(buf: &[u8]) -> Vec<Entry> {
    // One record per newline plus the tail. Over-reserves when records are
    // dropped, which is cheap next to re-growing.
    let records = buf.iter().filter(|&&b| b == b'\n').count() + 1;
    let mut entries = Vec::with_capacity(records);

    for record in buf.split(|&b| b == b'\n') {
        let (key, value) = match record.iter().position(|&b| b == b'\t') {
            Some(tab) => (&record[..tab], Some(record[tab + 1..].to_vec())),
            None => (record, None),
        };
        if key.is_empty() {
            continue;
        }
        entries.push(Entry {
            key: key.to_vec(),
            value,
        });
    }

    entries
}
