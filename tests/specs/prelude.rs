// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;

/// Returns a Command configured to run the kmp binary, isolated from the
/// caller's environment.
pub fn kmp_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kmp"));
    cmd.env_remove("KMP_LOG").env_remove("KMP_OUTPUT");
    cmd
}

/// Get path to a test fixture file
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
