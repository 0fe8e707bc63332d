// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The phrase set façade.
//!
//! [`PhraseSet`] ties the pieces together: parse the dictionary once, build
//! the tree once, then answer `contains`/`get`/`find_all_matches` for as long
//! as the set lives. Construction is the only moment anything mutates;
//! afterwards the set is plain immutable data, safe to share across threads
//! by reference with no locking.

use crate::parse::parse_entries;
use crate::scan::scan;
use crate::shape::{Hit, Query};
use crate::tree::{Lookup, TernaryTree};
use crate::types::{Fetched, ScanError};

/// An immutable exact-match dictionary with greedy phrase scanning.
///
/// Built once from a newline-delimited dictionary buffer (see
/// [`PhraseSet::new`]), never mutated afterwards. The set owns copies of all
/// key and value bytes; the caller's buffer can be dropped immediately.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    tree: TernaryTree,
}

impl PhraseSet {
    /// Build a set from a dictionary buffer.
    ///
    /// The buffer is newline-delimited records; within a record the first tab
    /// separates key from value. Records without a non-empty key are dropped
    /// silently, and duplicate keys resolve to the last occurrence.
    /// Construction never fails - a malformed or empty buffer just produces
    /// a set that misses everything.
    pub fn new(dictionary: impl AsRef<[u8]>) -> PhraseSet {
        PhraseSet {
            tree: TernaryTree::build(parse_entries(dictionary.as_ref())),
        }
    }

    /// Number of distinct keys in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set holds no keys at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Exact-match membership test.
    ///
    /// Empty queries are never members, whatever the dictionary holds.
    pub fn contains<'a>(&self, query: impl Into<Query<'a>>) -> bool {
        self.tree.contains(query.into().bytes())
    }

    /// Fetch the value stored for a key, three ways.
    ///
    /// [`Fetched::Missing`] when the key is absent, [`Fetched::NoValue`] when
    /// the key's record carried no tab, and [`Fetched::Value`] with the value
    /// projected into the query's shape otherwise. Absence is a normal
    /// return, not an error.
    pub fn get<'a>(&self, query: impl Into<Query<'a>>) -> Fetched {
        let query = query.into();
        match self.tree.lookup(query.bytes()) {
            Lookup::Absent => Fetched::Missing,
            Lookup::NoValue => Fetched::NoValue,
            Lookup::Value(value) => Fetched::Value(query.hit(value.to_vec())),
        }
    }

    /// Scan text for known phrases, longest first at every word position.
    ///
    /// Words are whitespace-delimited (runs collapse); candidates of up to
    /// `max_ngram` words are joined with single spaces and probed against the
    /// set, widest first, and every anchor's longest hit is reported in
    /// anchor order - including overlaps. Matches come back in the text's
    /// shape.
    ///
    /// `max_ngram == 0` is a contract violation and fails fast; a window
    /// wider than the text clamps gracefully.
    pub fn find_all_matches<'a>(
        &self,
        text: impl Into<Query<'a>>,
        max_ngram: usize,
    ) -> Result<Vec<Hit>, ScanError> {
        if max_ngram == 0 {
            return Err(ScanError::ZeroWindow);
        }
        let text = text.into();
        Ok(scan(&self.tree, text.bytes(), max_ngram)
            .into_iter()
            .map(|m| text.hit(m))
            .collect())
    }
}
