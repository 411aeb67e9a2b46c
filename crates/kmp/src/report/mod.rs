// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search result output.
//!
//! Renders a [`SearchReport`] as text or JSON.

mod json;
mod text;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::search::SearchReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for formatting search results into various output formats.
pub trait ReportFormatter {
    fn format(&self, report: &SearchReport) -> anyhow::Result<String>;
}

/// Format a report based on output format, returning the output string.
pub fn format_report(format: OutputFormat, report: &SearchReport) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(report)
}

/// Write formatted output, treating a closed reader (`kmp ... | head`) as a
/// normal end of output.
pub fn write_output(mut writer: impl Write, output: &str) -> io::Result<()> {
    match writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush())
    {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        result => result,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
