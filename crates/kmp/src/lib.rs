// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knuth-Morris-Pratt exact substring search.
//!
//! A [`Kmp`] matcher preprocesses its pattern once into a [`FailureTable`]
//! and then finds the first occurrence of the pattern in any number of
//! targets in linear time:
//!
//! ```
//! use kmp::Kmp;
//!
//! let kmp = Kmp::new("ababa");
//! assert_eq!(kmp.search("abadfasdfasdfasdfbcababa"), Some(19));
//! assert_eq!(kmp.search("ababb"), None);
//! ```
//!
//! This API is the whole search contract. The `kmp` binary in this package is
//! a command-line front end over it.

pub mod matcher;
pub mod table;

pub use matcher::Kmp;
pub use table::{FailureTable, build_failure_table};
