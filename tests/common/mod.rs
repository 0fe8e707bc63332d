//! Shared test utilities and fixtures.

#![allow(dead_code)]

use tupaia::{Hit, PhraseSet};

// ============================================================================
// DICTIONARY FIXTURES
// ============================================================================

/// Mixed dictionary exercising values, empty values, phrases, and non-ASCII
/// keys in one buffer.
pub const MIXED_DICT: &str = "foo\tFOO\nbar\t\nbaz\nthe foo\tTHE FOO\ncafé\nmoo";

/// Build a set from bare keys, one record each, no values.
pub fn set_of(keys: &[&str]) -> PhraseSet {
    PhraseSet::new(keys.join("\n"))
}

/// Build a set from key/value pairs.
pub fn set_of_pairs(pairs: &[(&str, &str)]) -> PhraseSet {
    let dictionary = pairs
        .iter()
        .map(|(k, v)| format!("{}\t{}", k, v))
        .collect::<Vec<_>>()
        .join("\n");
    PhraseSet::new(dictionary)
}

// ============================================================================
// RESULT HELPERS
// ============================================================================

/// Collect text hits into owned strings, panicking on byte hits.
pub fn texts(hits: Vec<Hit>) -> Vec<String> {
    hits.into_iter()
        .map(|hit| match hit {
            Hit::Text(s) => s,
            Hit::Bytes(b) => panic!("expected text hits, got bytes {:?}", b),
        })
        .collect()
}

/// Assert every reported match is itself a member of the set.
pub fn assert_matches_are_members(set: &PhraseSet, hits: &[Hit]) {
    for hit in hits {
        assert!(
            set.contains(hit.as_bytes()),
            "INVARIANT VIOLATED: reported match {:?} is not in the set",
            hit
        );
    }
}
