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

//! Structured error types for the benchtab CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` prints the
//! message and exits non-zero.

use benchtab::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchtab CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes, limit {max} bytes / {max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Parsing the log or rendering the table failed.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use benchtab_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("bench.log")
    ///     .map_err(|e| CliError::io_error("bench.log", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<BenchError> for CliError {
    fn from(source: BenchError) -> Self {
        Self::Conversion(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bench.log",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.log"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.log", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.log"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
    }

    #[test]
    fn test_conversion_from_bench_error() {
        let err: CliError = BenchError::identifier("expected 3 '_'-separated segments", 12).into();
        assert!(matches!(err, CliError::Conversion(_)));
        assert_eq!(
            err.to_string(),
            "Conversion error: IdentifierError at line 12: expected 3 '_'-separated segments"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("input and output are the same file");
        assert_eq!(err.to_string(), "Invalid input: input and output are the same file");
    }
}
