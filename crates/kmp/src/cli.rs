// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Find the first occurrence of a pattern in each target using Knuth-Morris-Pratt
#[derive(Parser)]
#[command(name = "kmp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to search for
    pub pattern: String,

    /// Strings to search in (read from stdin when neither targets nor --file are given)
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Read targets from a file, one per line ("-" for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", env = "KMP_OUTPUT")]
    pub output: OutputFormat,

    /// Report character offsets instead of byte offsets
    #[arg(long)]
    pub chars: bool,

    /// Include the failure table in the output
    #[arg(long)]
    pub table: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn unit(&self) -> Unit {
        if self.chars { Unit::Char } else { Unit::Byte }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Element type the pattern is matched over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Byte,
    Char,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
