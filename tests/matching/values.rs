//! Stored-value retrieval and the no-value sentinel.
//!
//! Three outcomes, never conflated: a key can be absent, present with no
//! recorded value, or present with a value - and the empty string is a
//! value like any other.

use super::common::{set_of_pairs, MIXED_DICT};
use tupaia::{Fetched, Hit, PhraseSet};

#[test]
fn values_come_back_for_valued_keys() {
    let set = PhraseSet::new("foo\tFOO\nbar\t\nbaz\tBAZ\nmoo\nmar");
    assert_eq!(set.get("foo"), Fetched::Value(Hit::Text("FOO".into())));
    assert_eq!(set.get("baz"), Fetched::Value(Hit::Text("BAZ".into())));
}

#[test]
fn trailing_tab_means_empty_value() {
    let set = PhraseSet::new("foo\tFOO\nbar\t\nbaz\tBAZ\nmoo\nmar");
    assert_eq!(set.get("bar"), Fetched::Value(Hit::Text("".into())));
}

#[test]
fn bare_keys_report_no_value() {
    let set = PhraseSet::new("foo\tFOO\nbar\t\nbaz\tBAZ\nmoo\nmar");
    assert_eq!(set.get("moo"), Fetched::NoValue);
    assert_eq!(set.get("mar"), Fetched::NoValue);
}

#[test]
fn absent_keys_report_missing() {
    let set = PhraseSet::new("foo\tFOO\nbar\t\nbaz\tBAZ\nmoo\nmar");
    assert_eq!(set.get("aoo"), Fetched::Missing);
    assert_eq!(set.get(""), Fetched::Missing);
}

#[test]
fn the_shared_fixture_distinguishes_all_three_outcomes() {
    let set = PhraseSet::new(MIXED_DICT);
    assert_eq!(set.get("bar"), Fetched::Value(Hit::Text("".into())));
    assert_eq!(set.get("baz"), Fetched::NoValue);
    assert_eq!(set.get("gone"), Fetched::Missing);
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let set = set_of_pairs(&[("k", "first"), ("k", "second"), ("k", "third")]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get("k"), Fetched::Value(Hit::Text("third".into())));
}

#[test]
fn a_later_bare_record_erases_an_earlier_value() {
    let set = PhraseSet::new("k\tvalued\nk");
    assert_eq!(set.get("k"), Fetched::NoValue);

    let set = PhraseSet::new("k\nk\tvalued");
    assert_eq!(set.get("k"), Fetched::Value(Hit::Text("valued".into())));
}

#[test]
fn only_the_first_tab_splits_key_from_value() {
    let set = PhraseSet::new("k\ta\tb\tc");
    assert_eq!(set.get("k"), Fetched::Value(Hit::Text("a\tb\tc".into())));
    assert!(!set.contains("k\ta"));
}

#[test]
fn phrase_keys_carry_values_too() {
    let set = PhraseSet::new(MIXED_DICT);
    assert_eq!(
        set.get("the foo"),
        Fetched::Value(Hit::Text("THE FOO".into()))
    );
}
