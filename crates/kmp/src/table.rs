// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure table ("partial match" table) construction.
//!
//! Entry `i` of the table is the length of the longest proper prefix of
//! `pattern[..i]` that is also a suffix of it. Entry 0 is the sentinel `-1`:
//! nothing to fall back to, advance the target instead.

use std::fmt;

use serde::Serialize;

/// Per-position fallback lengths for a pattern.
///
/// Built once from a pattern and never mutated. Two tables built from equal
/// patterns are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FailureTable {
    entries: Vec<isize>,
}

impl FailureTable {
    /// Build the table by matching the pattern against itself.
    ///
    /// Runs in O(P) time regardless of pattern content: each position reuses
    /// the fallback length of the previous one, and the chain of fallbacks it
    /// walks is paid for by earlier extensions. An empty pattern yields an
    /// empty table.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut entries: Vec<isize> = Vec::with_capacity(pattern.len());
        if pattern.is_empty() {
            return Self { entries };
        }

        entries.push(-1);
        for i in 1..pattern.len() {
            let prev = &pattern[i - 1];
            let mut j = entries[i - 1];
            let next = loop {
                let Ok(candidate) = usize::try_from(j) else {
                    break 0;
                };
                if pattern[candidate] == *prev {
                    break j + 1;
                }
                j = entries[candidate];
            };
            entries.push(next);
        }

        Self { entries }
    }

    pub fn as_slice(&self) -> &[isize] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, or `None` past the end of the table.
    pub fn get(&self, index: usize) -> Option<isize> {
        self.entries.get(index).copied()
    }

    /// Pattern offset to resume from after a mismatch with `matched`
    /// elements already matched. `None` means the chain is exhausted.
    pub(crate) fn fallback(&self, matched: usize) -> Option<usize> {
        usize::try_from(self.entries[matched]).ok()
    }
}

impl AsRef<[isize]> for FailureTable {
    fn as_ref(&self) -> &[isize] {
        &self.entries
    }
}

/// Renders the entries comma-separated, e.g. `-1,0,0,1,2`.
impl fmt::Display for FailureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Build the failure table for `pattern`.
///
/// Shorthand for [`FailureTable::build`], usable without a matcher.
pub fn build_failure_table<T: PartialEq>(pattern: &[T]) -> FailureTable {
    FailureTable::build(pattern)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
