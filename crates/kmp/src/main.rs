// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cli;
mod input;
mod logging;
mod report;
mod search;

#[cfg(test)]
mod test_utils;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::input::TargetSource;
use crate::report::{format_report, write_output};
use crate::search::{SearchConfig, SearchRunner};

/// Exit status when no target contains the pattern.
const EXIT_NO_MATCH: u8 = 1;
/// Exit status for I/O and output errors (clap uses 2 for usage errors too).
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(e) => {
            eprintln!("kmp: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Search every target and print the report. Returns whether anything matched.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let source = TargetSource::select(&cli.targets, cli.file.as_deref());
    tracing::debug!(?source, "reading targets");
    let targets = source.read()?;

    let runner = SearchRunner::new(SearchConfig {
        unit: cli.unit(),
        include_table: cli.table,
    });
    let report = runner.run(&cli.pattern, targets);

    let output = format_report(cli.output, &report)?;
    write_output(std::io::stdout().lock(), &output)?;

    Ok(report.matched_any())
}
