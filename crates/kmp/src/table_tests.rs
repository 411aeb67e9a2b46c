// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for failure table construction.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use yare::parameterized;

use super::*;

/// Longest proper border of every prefix, computed the slow way.
fn brute_force_table(pattern: &[u8]) -> Vec<isize> {
    (0..pattern.len())
        .map(|i| {
            if i == 0 {
                return -1;
            }
            let prefix = &pattern[..i];
            (0..i)
                .rev()
                .find(|&k| prefix[..k] == prefix[i - k..])
                .map_or(0, |k| k as isize)
        })
        .collect()
}

// =============================================================================
// KNOWN TABLES
// =============================================================================

#[parameterized(
    single = { "a", &[-1] },
    distinct = { "abcde", &[-1, 0, 0, 0, 0] },
    identical = { "aaaaa", &[-1, 0, 1, 2, 3] },
    alternating = { "ababa", &[-1, 0, 0, 1, 2] },
    periodic = { "abcabcab", &[-1, 0, 0, 0, 1, 2, 3, 4] },
    fallback_chain = { "aabaaab", &[-1, 0, 1, 0, 1, 2, 2] },
    mixed = { "abacabab", &[-1, 0, 0, 1, 0, 1, 2, 3] },
)]
fn builds_known_table(pattern: &str, expected: &[isize]) {
    let table = build_failure_table(pattern.as_bytes());
    assert_eq!(table.as_slice(), expected, "table for {:?}", pattern);
}

#[test]
fn empty_pattern_yields_empty_table() {
    let table = build_failure_table::<u8>(&[]);
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.to_string(), "");
}

#[test]
fn table_length_matches_pattern_length() {
    let table = build_failure_table(b"abcabd");
    assert_eq!(table.len(), 6);
    assert_eq!(table.get(5), Some(2));
    assert_eq!(table.get(6), None);
}

#[test]
fn sentinel_has_no_fallback() {
    let table = build_failure_table(b"aab");
    assert_eq!(table.fallback(0), None);
    assert_eq!(table.fallback(1), Some(0));
    assert_eq!(table.fallback(2), Some(1));
}

#[test]
fn works_over_non_byte_elements() {
    let pattern: Vec<char> = "ñañaña".chars().collect();
    let table = build_failure_table(&pattern);
    assert_eq!(table.as_slice(), &[-1, 0, 0, 1, 2, 3]);

    let words = ["to", "be", "or", "not", "to", "be"];
    let table = build_failure_table(&words);
    assert_eq!(table.as_slice(), &[-1, 0, 0, 0, 0, 1]);
}

#[test]
fn long_identical_pattern_is_linear() {
    let pattern = vec![b'a'; 100_000];
    let table = build_failure_table(&pattern);
    assert_eq!(table.get(99_999), Some(99_998));
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn display_is_comma_separated() {
    assert_eq!(build_failure_table(b"ababa").to_string(), "-1,0,0,1,2");
    assert_eq!(build_failure_table(b"x").to_string(), "-1");
}

#[test]
fn serializes_as_plain_array() {
    let json = serde_json::to_string(&build_failure_table(b"aab")).unwrap();
    assert_eq!(json, "[-1,0,1]");
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn matches_brute_force(pattern in "[ab]{0,16}") {
        let table = build_failure_table(pattern.as_bytes());
        let expected = brute_force_table(pattern.as_bytes());
        prop_assert_eq!(table.as_slice(), expected.as_slice());
    }

    #[test]
    fn matches_brute_force_wide_alphabet(pattern in "[a-e]{0,24}") {
        let table = build_failure_table(pattern.as_bytes());
        let expected = brute_force_table(pattern.as_bytes());
        prop_assert_eq!(table.as_slice(), expected.as_slice());
    }

    #[test]
    fn entries_are_bounded(pattern in "[abc]{1,32}") {
        let table = build_failure_table(pattern.as_bytes());
        prop_assert_eq!(table.get(0), Some(-1));
        for (i, &entry) in table.as_slice().iter().enumerate().skip(1) {
            prop_assert!(entry >= 0 && entry < i as isize, "entry {} at {}", entry, i);
        }
    }

    #[test]
    fn equal_patterns_give_equal_tables(pattern in "[ab]{0,16}") {
        let owned = pattern.clone().into_bytes();
        prop_assert_eq!(build_failure_table(pattern.as_bytes()), build_failure_table(&owned));
    }
}
