//! Greedy phrase scanning over running text.
//!
//! At every word position the widest window is tried first; the first hit
//! wins that anchor and the scan moves one word forward, so overlapping
//! and repeated matches all surface.

use super::common::{assert_matches_are_members, set_of, texts};
use tupaia::{PhraseSet, ScanError};

#[test]
fn widest_window_wins_at_each_anchor() {
    let set = set_of(&["foo", "bar", "baz", "café", "the foo", "moo"]);
    let hits = set
        .find_all_matches("café the foo went over the moo", 2)
        .unwrap();
    assert_matches_are_members(&set, &hits);
    assert_eq!(texts(hits), vec!["café", "the foo", "foo", "moo"]);
}

#[test]
fn word_sized_windows_match_single_words_only() {
    let set = set_of(&["foo", "bar", "baz", "café", "the foo", "moo"]);
    let hits = set
        .find_all_matches("café the foo went over the moo", 1)
        .unwrap();
    assert_eq!(texts(hits), vec!["café", "foo", "moo"]);
}

#[test]
fn overlapping_phrases_are_both_reported() {
    let set = set_of(&["a b", "b c"]);
    let hits = set.find_all_matches("a b c", 2).unwrap();
    assert_eq!(texts(hits), vec!["a b", "b c"]);
}

#[test]
fn every_suffix_of_a_nested_phrase_matches() {
    let set = set_of(&["a b c", "b c", "c"]);
    let hits = set.find_all_matches("a b c", 3).unwrap();
    assert_eq!(texts(hits), vec!["a b c", "b c", "c"]);
}

#[test]
fn repeated_occurrences_repeat_in_text_order() {
    let set = set_of(&["moo"]);
    let hits = set.find_all_matches("moo goes moo", 2).unwrap();
    assert_eq!(texts(hits), vec!["moo", "moo"]);
}

#[test]
fn whitespace_runs_collapse_before_matching() {
    let set = set_of(&["the foo"]);
    let hits = set.find_all_matches("the\t\tfoo  bar\nthe   foo", 2).unwrap();
    // Matches come back joined by single spaces, not the raw gap bytes
    assert_eq!(texts(hits), vec!["the foo", "the foo"]);
}

#[test]
fn oversized_windows_clamp_to_the_remaining_words() {
    // Window 40 clamps to the two words that exist; the second anchor
    // still reports its own one-word match.
    let set = set_of(&["the foo", "foo"]);
    let hits = set.find_all_matches("the foo", 40).unwrap();
    assert_eq!(texts(hits), vec!["the foo", "foo"]);
}

#[test]
fn zero_window_is_rejected() {
    let set = set_of(&["foo"]);
    assert!(matches!(
        set.find_all_matches("foo", 0),
        Err(ScanError::ZeroWindow)
    ));
}

#[test]
fn empty_dictionary_matches_nothing() {
    let set = PhraseSet::new("");
    for k in [1, 2, 5] {
        assert!(set.find_all_matches("any words here", k).unwrap().is_empty());
    }
}

#[test]
fn blank_text_yields_no_matches() {
    let set = set_of(&["foo"]);
    assert!(set.find_all_matches("", 2).unwrap().is_empty());
    assert!(set.find_all_matches("   \t\n  ", 2).unwrap().is_empty());
}

#[test]
fn single_words_never_match_across_word_boundaries() {
    // "foobar" must not match "foo" or "bar"
    let set = set_of(&["foo", "bar"]);
    assert!(set.find_all_matches("foobar", 2).unwrap().is_empty());
}
