// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use proptest::{collection::vec, prelude::*, sample::Index};
use turbobm::{Finder, OccurrenceTable, SkipTable};

/// Returns the offset of the first occurrence of `needle` in `haystack`, or `haystack.len()`
fn naive_search(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .unwrap_or(haystack.len())
}

/// Runs both search loops over `haystack`, returning their results
fn search_both(haystack: &[u8], needle: &[u8]) -> (usize, usize) {
    let occ = OccurrenceTable::new(needle);
    let skip = SkipTable::new(needle);

    (
        turbobm::search(haystack, &occ, &skip, needle),
        turbobm::search_turbo(haystack, &occ, &skip, needle),
    )
}

#[test]
fn partial_match_before_match() {
    assert_eq!(search_both(b"ABCABCABD", b"ABCABD"), (3, 3));
}

#[test]
fn self_similar_needle() {
    assert_eq!(search_both(b"AAAAAAAA", b"AAA"), (0, 0));
}

#[test]
fn word_in_sentence() {
    assert_eq!(search_both(b"hello world", b"world"), (6, 6));
}

#[test]
fn absent_needle() {
    assert_eq!(search_both(b"abc", b"xyz"), (3, 3));
}

#[test]
fn needle_longer_than_haystack() {
    assert_eq!(search_both(b"x", b"xx"), (1, 1));
}

#[test]
fn binary_data() {
    let mut haystack = vec![0xff; 4096];
    haystack[4000..4004].copy_from_slice(&[0, 1, 0, 0xff]);

    assert_eq!(search_both(&haystack, &[0xff, 0, 1, 0, 0xff]), (3999, 3999));
}

#[test]
fn long_periodic_haystack() {
    let mut haystack = b"ab".repeat(10_000);
    haystack.extend_from_slice(b"abb");
    let needle = b"ababababababb";

    let expected = naive_search(&haystack, needle);
    assert_eq!(search_both(&haystack, needle), (expected, expected));
}

#[test]
fn finder_counts_overlapping_matches() {
    let haystack = b"AAAAAAAA";
    let finder = Finder::new(b"AAA");

    assert_eq!(finder.find_iter(haystack).count(), 6);
}

/// A haystack together with a needle cut out of it, so that most cases contain a match
fn haystack_with_needle(alphabet: u8) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (vec(0..alphabet, 1..300), any::<Index>(), 1usize..24).prop_map(|(haystack, start, len)| {
        let start = start.index(haystack.len());
        let end = (start + len).min(haystack.len());
        let needle = haystack[start..end].to_vec();
        (haystack, needle)
    })
}

proptest! {
    #[test]
    fn small_alphabet_matches_naive(
        haystack in vec(0u8..3, 0..200),
        needle in vec(0u8..3, 1..10),
    ) {
        let expected = naive_search(&haystack, &needle);
        prop_assert_eq!(search_both(&haystack, &needle), (expected, expected));
    }

    #[test]
    fn binary_alphabet_cut_needle_matches_naive((haystack, needle) in haystack_with_needle(2)) {
        let expected = naive_search(&haystack, &needle);
        prop_assert_eq!(search_both(&haystack, &needle), (expected, expected));
    }

    #[test]
    fn full_alphabet_matches_naive(
        haystack in vec(any::<u8>(), 0..400),
        needle in vec(any::<u8>(), 1..6),
    ) {
        let expected = naive_search(&haystack, &needle);
        prop_assert_eq!(search_both(&haystack, &needle), (expected, expected));
    }

    #[test]
    fn full_alphabet_cut_needle_matches_naive((haystack, needle) in haystack_with_needle(255)) {
        let expected = naive_search(&haystack, &needle);
        prop_assert!(expected < haystack.len());
        prop_assert_eq!(search_both(&haystack, &needle), (expected, expected));
    }

    #[test]
    fn skip_table_entries_in_range(needle in vec(0u8..4, 1..64)) {
        let skip = SkipTable::new(&needle);

        prop_assert_eq!(skip.len(), needle.len());
        for &shift in skip.as_slice() {
            prop_assert!((1..=needle.len()).contains(&shift));
        }
    }

    #[test]
    fn tables_are_deterministic(needle in vec(0u8..4, 0..64)) {
        prop_assert_eq!(SkipTable::new(&needle), SkipTable::new(&needle));
        prop_assert_eq!(OccurrenceTable::new(&needle), OccurrenceTable::new(&needle));
    }

    #[test]
    fn finder_iter_matches_naive(haystack in vec(0u8..2, 0..120), needle in vec(0u8..2, 1..5)) {
        let expected: Vec<usize> = (0..haystack.len())
            .filter(|&i| haystack[i..].starts_with(&needle))
            .collect();
        let finder = Finder::new(&needle);

        prop_assert_eq!(finder.find_iter(&haystack).collect::<Vec<_>>(), expected);
    }
}
