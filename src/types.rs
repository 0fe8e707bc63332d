// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a phrase dictionary.
//!
//! An [`Entry`] is one parsed dictionary record. [`Fetched`] is the three-way
//! outcome of a value lookup - the distinction between "no value recorded" and
//! "key absent entirely" is the whole reason `get` exists as a separate
//! operation from `contains`, so it gets its own type rather than a nested
//! `Option`. [`ScanError`] covers the one caller contract the scanner
//! enforces at runtime.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Entry**: `key` is never empty. The parser drops empty-key records
//!   before they reach the tree, and the tree refuses them independently.
//! - **Entry**: `value = None` means the record had no tab; `Some(vec![])`
//!   means the record ended in a tab. These are different answers.

use std::fmt;

use crate::shape::Hit;

// =============================================================================
// DICTIONARY ENTRIES
// =============================================================================

/// One parsed dictionary record: a non-empty key and an optional value.
///
/// The entry owns its bytes. Parsing copies them out of the caller's buffer
/// so the built set holds no borrow of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    /// Key bytes. Never empty.
    pub key: Vec<u8>,
    /// `None` when the record had no tab, `Some` (possibly empty) otherwise.
    pub value: Option<Vec<u8>>,
}

// =============================================================================
// LOOKUP OUTCOME
// =============================================================================

/// Three-way outcome of [`PhraseSet::get`](crate::PhraseSet::get).
///
/// A successful hit carries the stored value projected into the shape of the
/// query that asked for it (text query, text value; byte query, byte value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// The key is not in the dictionary at all.
    Missing,
    /// The key is present but its record carried no value.
    NoValue,
    /// The key is present with this value, in the query's shape.
    Value(Hit),
}

// =============================================================================
// SCAN CONTRACT ERRORS
// =============================================================================

/// Caller contract violations for [`PhraseSet::find_all_matches`](crate::PhraseSet::find_all_matches).
///
/// Absence is never an error - an unknown key or a text with no known
/// phrases comes back as a normal empty result. The only thing the scanner
/// rejects is a window that cannot hold a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// `max_ngram` was zero. The scanner needs at least a one-word window.
    ZeroWindow,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::ZeroWindow => {
                write!(f, "max n-gram size must be at least 1")
            }
        }
    }
}

impl std::error::Error for ScanError {}
