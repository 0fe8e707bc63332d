// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whitespace tokenization.
//!
//! Splits scan input into word byte-ranges. A word is a maximal run of
//! non-whitespace bytes; any run of ASCII whitespace (space, tab, newline,
//! carriage return, form feed) collapses into a single delimiter, so
//! `"a  b"` and `"a\tb"` tokenize identically to `"a b"`. Leading and
//! trailing whitespace yield no empty words.
//!
//! Ranges index into the caller's bytes rather than copying - the scanner
//! joins them with single spaces itself, because that is the convention
//! multi-word dictionary keys are stored in.

use std::ops::Range;

/// Iterate the word ranges of `bytes`, in order, single pass.
#[inline]
pub(crate) fn words(bytes: &[u8]) -> Words<'_> {
    Words { bytes, at: 0 }
}

/// Iterator over word byte-ranges. See [`words`].
#[derive(Debug)]
pub(crate) struct Words<'a> {
    bytes: &'a [u8],
    at: usize,
}

impl Iterator for Words<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        while self.at < self.bytes.len() && self.bytes[self.at].is_ascii_whitespace() {
            self.at += 1;
        }
        if self.at == self.bytes.len() {
            return None;
        }
        let start = self.at;
        while self.at < self.bytes.len() && !self.bytes[self.at].is_ascii_whitespace() {
            self.at += 1;
        }
        Some(start..self.at)
    }
}
