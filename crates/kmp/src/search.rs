// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel search runner.
//!
//! Compiles the pattern once and searches every target against the shared
//! matcher using rayon. Results keep the order of the input targets.

use kmp::{FailureTable, Kmp};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::Unit;

/// Configuration for the search runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    pub unit: Unit,
    /// Attach the failure table to the report.
    pub include_table: bool,
}

/// A compiled pattern in the configured unit.
pub enum Searcher {
    Byte(Kmp<u8>),
    Char(Kmp<char>),
}

impl Searcher {
    pub fn new(pattern: &str, unit: Unit) -> Self {
        match unit {
            Unit::Byte => Searcher::Byte(Kmp::new(pattern)),
            Unit::Char => Searcher::Char(Kmp::from_chars(pattern)),
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Searcher::Byte(_) => Unit::Byte,
            Searcher::Char(_) => Unit::Char,
        }
    }

    pub fn table(&self) -> &FailureTable {
        match self {
            Searcher::Byte(kmp) => kmp.table(),
            Searcher::Char(kmp) => kmp.table(),
        }
    }

    pub fn search(&self, target: &str) -> Option<usize> {
        match self {
            Searcher::Byte(kmp) => kmp.search(target),
            Searcher::Char(kmp) => kmp.search_chars(target),
        }
    }
}

/// Outcome for a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResult {
    pub target: String,
    /// Start of the first occurrence, `None` when absent.
    pub index: Option<usize>,
}

/// Outcome of searching one pattern across all targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub pattern: String,
    pub unit: Unit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<FailureTable>,
    pub results: Vec<TargetResult>,
}

impl SearchReport {
    pub fn match_count(&self) -> usize {
        self.results.iter().filter(|r| r.index.is_some()).count()
    }

    pub fn matched_any(&self) -> bool {
        self.results.iter().any(|r| r.index.is_some())
    }
}

/// Runs one pattern against a batch of targets.
pub struct SearchRunner {
    config: SearchConfig,
}

impl SearchRunner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, pattern: &str, targets: Vec<String>) -> SearchReport {
        let searcher = Searcher::new(pattern, self.config.unit);
        tracing::debug!(
            unit = ?searcher.unit(),
            table = %searcher.table(),
            targets = targets.len(),
            "compiled pattern"
        );

        let results: Vec<TargetResult> = targets
            .into_par_iter()
            .map(|target| {
                let index = searcher.search(&target);
                TargetResult { target, index }
            })
            .collect();

        let report = SearchReport {
            pattern: pattern.to_string(),
            unit: searcher.unit(),
            table: self
                .config
                .include_table
                .then(|| searcher.table().clone()),
            results,
        };
        tracing::debug!(
            matched = report.match_count(),
            searched = report.results.len(),
            "search complete"
        );
        report
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
