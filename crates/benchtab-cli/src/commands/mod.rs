// Dweve Benchtab - Benchmark log to markdown table converter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command implementations and shared I/O helpers.
//!
//! The path `-` stands for stdin when reading and stdout when writing.

mod convert;

pub use convert::{convert, ConvertSummary};

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};

/// Default maximum input size (1 GB).
/// Can be overridden via the `BENCHTAB_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Path that selects stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// Get the maximum input size from environment or use default.
pub fn max_file_size() -> u64 {
    std::env::var("BENCHTAB_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a whole log into memory with size validation.
///
/// Files are checked with `fs::metadata()` before reading. Stdin is read
/// up to one byte past the limit so oversized input is still rejected.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The input exceeds the maximum size (configurable via `BENCHTAB_MAX_FILE_SIZE`)
/// - The input cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use benchtab_cli::commands::read_input;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// let log = read_input("bench.log")?;
/// let piped = read_input("-")?;
/// # Ok(())
/// # }
/// ```
pub fn read_input(path: &str) -> Result<String, CliError> {
    let max = max_file_size();

    if path == STDIO_PATH {
        let mut content = String::new();
        io::stdin()
            .lock()
            .take(max.saturating_add(1))
            .read_to_string(&mut content)
            .map_err(|e| CliError::io_error(path, e))?;
        if content.len() as u64 > max {
            return Err(CliError::file_too_large(path, content.len() as u64, max));
        }
        return Ok(content);
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Whether `input` and `output` resolve to the same existing file.
///
/// Both paths are canonicalized, so `./bench.log`, `dir/../bench.log` and
/// symlinks all match their target. An output that does not exist yet, or
/// either side being `-`, is never the same file.
pub fn same_file(input: &str, output: &str) -> bool {
    if input == STDIO_PATH || output == STDIO_PATH {
        return false;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write content to a file, or to stdout for `-`.
///
/// The file is created (or truncated) only here, after the content is
/// complete.
pub fn write_output(content: &str, path: &str) -> Result<(), CliError> {
    if path == STDIO_PATH {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CliError::io_error(path, e));
    }

    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_write_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        write_output("alpha:\n", path).unwrap();
        assert_eq!(read_input(path).unwrap(), "alpha:\n");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input("/nonexistent/bench.log").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/bench.log"));
    }

    #[test]
    fn test_same_file_resolves_aliases() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("bench.log");
        fs::write(&log, "x").unwrap();
        let direct = log.to_str().unwrap();
        let dotted = dir.path().join(".").join("bench.log");
        let parent = dir.path().join("sub").join("..").join("bench.log");
        fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(same_file(direct, direct));
        assert!(same_file(direct, dotted.to_str().unwrap()));
        assert!(same_file(parent.to_str().unwrap(), direct));
    }

    #[test]
    fn test_same_file_distinct_or_missing() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("bench.log");
        let other = dir.path().join("table.md");
        fs::write(&log, "x").unwrap();
        let log = log.to_str().unwrap();

        assert!(!same_file(log, other.to_str().unwrap()));
        fs::write(&other, "y").unwrap();
        assert!(!same_file(log, other.to_str().unwrap()));
        assert!(!same_file(STDIO_PATH, STDIO_PATH));
        assert!(!same_file(log, STDIO_PATH));
    }

    #[test]
    fn test_write_to_missing_directory() {
        let err = write_output("x", "/nonexistent/dir/table.md").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
