// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input shapes and the round-trip contract.
//!
//! Callers hand queries in as either UTF-8 text or raw bytes, and they get
//! results back in the same shape. The shape decision happens exactly once, at
//! the API boundary, by constructing a [`Query`]; everything past the boundary
//! works on plain bytes. Results come back as an owned [`Hit`] projected
//! through the query that produced them.
//!
//! The union is closed: a shape outside text-or-bytes does not typecheck,
//! so there is no runtime rejection path.
//!
//! Text projection decodes with U+FFFD replacement rather than failing -
//! stored values are arbitrary bytes and a text-shaped caller still deserves
//! an answer for them.

// =============================================================================
// QUERY: borrowed input, shape decided at the boundary
// =============================================================================

/// A query or text argument with its shape remembered.
///
/// `From` conversions cover the usual caller spellings; string-ish sources
/// become [`Query::Text`], byte-ish sources become [`Query::Bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// UTF-8 text, viewed as its bytes for matching.
    Text(&'a str),
    /// A raw byte sequence, passed through unchanged.
    Bytes(&'a [u8]),
}

impl<'a> Query<'a> {
    /// The canonical byte view every component matches against.
    #[inline]
    pub(crate) fn bytes(&self) -> &'a [u8] {
        match self {
            Query::Text(s) => s.as_bytes(),
            Query::Bytes(b) => b,
        }
    }

    /// Project result bytes back into this query's shape.
    pub(crate) fn hit(&self, bytes: Vec<u8>) -> Hit {
        match self {
            Query::Text(_) => Hit::Text(String::from_utf8_lossy(&bytes).into_owned()),
            Query::Bytes(_) => Hit::Bytes(bytes),
        }
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(s: &'a str) -> Self {
        Query::Text(s)
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(s: &'a String) -> Self {
        Query::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Query<'a> {
    fn from(b: &'a [u8]) -> Self {
        Query::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Query<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Query::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Query<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Query::Bytes(b)
    }
}

// =============================================================================
// HIT: owned output, shape echoed from the query
// =============================================================================

/// An owned result in the shape of the query that produced it.
///
/// Text queries yield `Hit::Text`, byte queries yield `Hit::Bytes` - the
/// round-trip symmetry is a hard contract, not a convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Result decoded as UTF-8 text (lossily, for non-UTF-8 value bytes).
    Text(String),
    /// Result as raw bytes.
    Bytes(Vec<u8>),
}

impl Hit {
    /// The underlying bytes regardless of shape.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Hit::Text(s) => s.as_bytes(),
            Hit::Bytes(b) => b,
        }
    }
}
