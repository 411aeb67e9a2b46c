// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target collection from arguments, files, and stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error while reading targets.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read targets from {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read targets from stdin")]
    Stdin(#[source] io::Error),
}

/// Where targets come from for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource<'a> {
    Args(&'a [String]),
    File(&'a Path),
    Stdin,
}

impl<'a> TargetSource<'a> {
    /// Pick the source: `--file` wins (`-` meaning stdin), then positional
    /// targets, then stdin.
    pub fn select(args: &'a [String], file: Option<&'a Path>) -> Self {
        match file {
            Some(path) if path == Path::new("-") => TargetSource::Stdin,
            Some(path) => TargetSource::File(path),
            None if args.is_empty() => TargetSource::Stdin,
            None => TargetSource::Args(args),
        }
    }

    pub fn read(&self) -> Result<Vec<String>, InputError> {
        match self {
            TargetSource::Args(args) => Ok(args.to_vec()),
            TargetSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::File {
                    path: path.to_path_buf(),
                    source,
                })?;
                read_lines(BufReader::new(file)).map_err(|source| InputError::File {
                    path: path.to_path_buf(),
                    source,
                })
            }
            TargetSource::Stdin => read_lines(io::stdin().lock()).map_err(InputError::Stdin),
        }
    }
}

/// Read one target per line, stripping `\n` / `\r\n` terminators.
///
/// Lines that are not valid UTF-8 are skipped with a warning so the rest of
/// the batch is still searched.
pub fn read_lines(mut reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => lines.push(line),
            Err(e) => tracing::warn!("skipping line {}: {}", line_no, e.utf8_error()),
        }
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
