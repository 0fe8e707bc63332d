// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest-match-first n-gram scanning.
//!
//! For every word position (anchor) in the text, try the widest candidate
//! phrase that fits - up to `max_ngram` words, joined with single spaces -
//! and shrink one word at a time until the tree recognizes one or the window
//! closes. The first hit wins the anchor; the scan then advances exactly one
//! word, never skipping the words a match consumed. That makes overlapping
//! results deliberate: "the foo" at anchor 1 and "foo" at anchor 2 are both
//! reported.
//!
//! Cost is O(words × max_ngram) candidate probes. The candidate buffer is
//! joined once per anchor at the widest window and shrunk by truncating at
//! word boundaries, so shrinking costs nothing but the probe.

use crate::tokenize::words;
use crate::tree::TernaryTree;

/// Scan `bytes` and return every longest-at-its-anchor phrase the tree
/// recognizes, in anchor order, duplicates and overlaps preserved.
///
/// Matches come back in canonical single-space join form, which differs from
/// the raw input span only when the input separated the words with other
/// whitespace. Callers enforce `max_ngram >= 1` at the API boundary.
pub(crate) fn scan(tree: &TernaryTree, bytes: &[u8], max_ngram: usize) -> Vec<Vec<u8>> {
    debug_assert!(max_ngram >= 1);

    let words: Vec<_> = words(bytes).collect();
    let mut matches = Vec::new();
    let mut candidate: Vec<u8> = Vec::new();
    // Candidate length after each whole word, for boundary truncation.
    let mut stops: Vec<usize> = Vec::with_capacity(max_ngram.min(words.len()));

    for anchor in 0..words.len() {
        // Clamp the window to the words that remain.
        let widest = max_ngram.min(words.len() - anchor);

        candidate.clear();
        stops.clear();
        for (i, range) in words[anchor..anchor + widest].iter().enumerate() {
            if i > 0 {
                candidate.push(b' ');
            }
            candidate.extend_from_slice(&bytes[range.clone()]);
            stops.push(candidate.len());
        }

        for &stop in stops.iter().rev() {
            candidate.truncate(stop);
            if tree.contains(&candidate) {
                matches.push(candidate.clone());
                break;
            }
        }
    }

    matches
}
