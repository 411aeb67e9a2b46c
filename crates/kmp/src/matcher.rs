// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linear-time first-occurrence search over a precomputed failure table.

use std::borrow::Borrow;

use crate::table::FailureTable;

/// A pattern compiled for repeated Knuth-Morris-Pratt searches.
///
/// The pattern and its [`FailureTable`] are fixed at construction and shared
/// by every search, so a single matcher can serve any number of targets, from
/// any number of threads.
///
/// An empty pattern matches at index 0 of every target, the empty target
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kmp<T = u8> {
    pattern: Box<[T]>,
    table: FailureTable,
}

impl Kmp<u8> {
    /// Compile `pattern` for searching UTF-8 bytes.
    ///
    /// Indices returned by [`search`](Self::search) are byte offsets.
    pub fn new(pattern: &str) -> Self {
        Self::from_slice(pattern.as_bytes())
    }

    /// Byte offset of the first occurrence of the pattern in `target`.
    pub fn search(&self, target: &str) -> Option<usize> {
        self.find(target.as_bytes())
    }
}

impl Kmp<char> {
    /// Compile `pattern` for searching Unicode scalar values.
    ///
    /// Indices returned by [`search_chars`](Self::search_chars) count chars,
    /// not bytes.
    pub fn from_chars(pattern: &str) -> Self {
        Self::from_vec(pattern.chars().collect())
    }

    /// Char offset of the first occurrence of the pattern in `target`.
    pub fn search_chars(&self, target: &str) -> Option<usize> {
        self.find_in(target.chars())
    }
}

impl<T: PartialEq> Kmp<T> {
    pub fn from_vec(pattern: Vec<T>) -> Self {
        let table = FailureTable::build(&pattern);
        tracing::trace!(pattern_len = pattern.len(), table = %table, "built failure table");
        Self {
            pattern: pattern.into_boxed_slice(),
            table,
        }
    }

    pub fn from_slice(pattern: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(pattern.to_vec())
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    /// Pattern length.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Index of the first occurrence of the pattern in `target`.
    pub fn find(&self, target: &[T]) -> Option<usize> {
        self.find_in(target)
    }

    /// Index of the first occurrence of the pattern in a sequence of
    /// elements.
    ///
    /// Each element is pulled from the iterator exactly once. Mismatches
    /// follow the fallback chain without consuming input, so the scan is
    /// O(T) and stops as soon as the earliest occurrence completes.
    pub fn find_in<I>(&self, target: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let len = self.pattern.len();
        if len == 0 {
            return Some(0);
        }

        // Number of pattern elements matched so far.
        let mut matched = 0;
        for (i, element) in target.into_iter().enumerate() {
            let element = element.borrow();
            loop {
                if *element == self.pattern[matched] {
                    matched += 1;
                    break;
                }
                match self.table.fallback(matched) {
                    Some(resume) => matched = resume,
                    None => {
                        matched = 0;
                        break;
                    }
                }
            }

            if matched == len {
                let start = i + 1 - len;
                tracing::trace!(start, "pattern found");
                return Some(start);
            }
        }

        tracing::trace!("pattern not found");
        None
    }
}

impl From<&str> for Kmp<u8> {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl<T: PartialEq> From<Vec<T>> for Kmp<T> {
    fn from(pattern: Vec<T>) -> Self {
        Self::from_vec(pattern)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
