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

//! Error types for benchmark log parsing and table rendering.

use std::fmt;
use thiserror::Error;

/// Result type for benchtab operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// Benchmark identifier does not split into subject, test and variant.
    Identifier,
    /// Metric field is missing or not a non-negative integer.
    Metric,
    /// A row lacks a variant seen elsewhere in the log.
    MissingVariant,
    /// Reading input or writing output failed.
    Io,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "IdentifierError"),
            Self::Metric => write!(f, "MetricError"),
            Self::MissingVariant => write!(f, "MissingVariantError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised while turning a benchmark log into a table.
///
/// `line` is the 1-based input line the error refers to, or `0` when the
/// error is not tied to a single input line (rendering, I/O).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}: {}", .kind, at_line(.line), .message)]
pub struct BenchError {
    /// The kind of error.
    pub kind: BenchErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based), `0` if unknown.
    pub line: usize,
}

fn at_line(line: &usize) -> String {
    if *line == 0 {
        String::new()
    } else {
        format!(" at line {}", line)
    }
}

impl BenchError {
    /// Create a new error.
    pub fn new(kind: BenchErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn identifier(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::Identifier, message, line)
    }

    pub fn metric(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::Metric, message, line)
    }

    /// Missing `(subject, test, variant)` cell encountered while rendering.
    pub fn missing_variant(subject: &str, test: &str, variant: &str) -> Self {
        Self::new(
            BenchErrorKind::MissingVariant,
            format!(
                "test '{}' of subject '{}' has no result for variant '{}'",
                test, subject, variant
            ),
            0,
        )
    }

    pub fn io(message: impl Into<String>, line: usize) -> Self {
        Self::new(BenchErrorKind::Io, message, line)
    }
}

impl From<fmt::Error> for BenchError {
    fn from(_: fmt::Error) -> Self {
        Self::io("formatter error while rendering table", 0)
    }
}
