//! Exact membership behavior.
//!
//! `contains` is a byte-for-byte question: no normalization, no prefix
//! credit, no case folding. The scan path is the only place whitespace
//! gets canonicalized.

use super::common::set_of;
use tupaia::PhraseSet;

#[test]
fn known_keys_are_present() {
    let set = set_of(&["foo", "bar", "baz", "café", "the foo"]);
    assert!(set.contains("foo"));
    assert!(set.contains("café"));
    assert!(set.contains("the foo"));
    assert!(!set.contains("moo"));
    assert!(!set.contains("fooX"));
}

#[test]
fn prefixes_and_extensions_are_absent() {
    let set = set_of(&["the foo"]);
    assert!(!set.contains("the"));
    assert!(!set.contains("the fo"));
    assert!(!set.contains("the foo "));
    assert!(!set.contains(" the foo"));
    assert!(!set.contains("the foo x"));
}

#[test]
fn membership_is_case_sensitive() {
    let set = set_of(&["Foo"]);
    assert!(set.contains("Foo"));
    assert!(!set.contains("foo"));
    assert!(!set.contains("FOO"));
}

#[test]
fn multibyte_keys_are_matched_bytewise() {
    let set = set_of(&["café", "ナンバー", "🦀 club"]);
    assert!(set.contains("café"));
    assert!(set.contains("ナンバー"));
    assert!(set.contains("🦀 club"));
    assert!(!set.contains("cafe"));
}

#[test]
fn lookup_does_not_collapse_whitespace() {
    let set = set_of(&["the foo"]);
    assert!(!set.contains("the  foo"));
    assert!(!set.contains("the\tfoo"));
}

#[test]
fn empty_query_is_absent_even_when_dictionary_is_not() {
    let set = set_of(&["foo"]);
    assert!(!set.contains(""));
}

#[test]
fn keys_survive_interleaved_record_order() {
    // Insertion balance must not depend on the buffer's record order
    let forward = set_of(&["a", "b", "c", "d", "e", "f", "g"]);
    let backward = set_of(&["g", "f", "e", "d", "c", "b", "a"]);
    for key in ["a", "b", "c", "d", "e", "f", "g"] {
        assert!(forward.contains(key), "missing {} in forward order", key);
        assert!(backward.contains(key), "missing {} in backward order", key);
    }
    assert_eq!(forward.len(), backward.len());
}

#[test]
fn blank_records_do_not_add_keys() {
    let set = PhraseSet::new("\n\nfoo\n\n\nbar\n\n");
    assert_eq!(set.len(), 2);
    assert!(set.contains("foo"));
    assert!(set.contains("bar"));
}
