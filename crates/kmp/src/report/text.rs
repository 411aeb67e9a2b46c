// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::borrow::Cow;
use std::fmt::Write;

use crate::search::SearchReport;

use super::ReportFormatter;

/// Text format formatter: one `<index>\t<target>` line per target,
/// `-` standing in for the index when the pattern is absent.
///
/// Control characters and backslashes in targets are escaped (`\t`, `\n`,
/// `\\`, `\u{1b}`) so each target stays on its own line.
pub struct TextFormatter;

/// Marker printed in place of an index when the pattern is absent.
const NOT_FOUND: &str = "-";

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &SearchReport) -> anyhow::Result<String> {
        let mut output = String::new();

        if let Some(ref table) = report.table {
            writeln!(output, "table: {}", table)?;
        }

        for result in &report.results {
            let target = escape_target(&result.target);
            match result.index {
                Some(index) => writeln!(output, "{}\t{}", index, target)?,
                None => writeln!(output, "{}\t{}", NOT_FOUND, target)?,
            }
        }

        Ok(output)
    }
}

fn needs_escape(c: char) -> bool {
    c.is_control() || c == '\\'
}

fn escape_target(target: &str) -> Cow<'_, str> {
    if !target.contains(needs_escape) {
        return Cow::Borrowed(target);
    }

    let mut escaped = String::with_capacity(target.len() + 8);
    for c in target.chars() {
        if needs_escape(c) {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}
