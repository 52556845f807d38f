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

//! Single-line parsing of benchmark harness output.
//!
//! A significant line looks like:
//!
//! ```text
//! test unstable::bench_<subject>_<test>_<variant> ... bench:  1,234 ns/iter (+/- 56)
//! ```
//!
//! Only the identifier directly after [`MARKER`] and the first numeric token
//! after the first `:` are consumed. Everything else is ignored.

use crate::error::{BenchError, Result};
use std::fmt;

/// Literal prefix of every significant log line.
pub const MARKER: &str = "test unstable::bench_";

/// Composite benchmark key decoded from `<subject>_<test>_<variant>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchmarkId {
    /// Module or component under test.
    pub subject: String,
    /// Benchmark case name.
    pub test: String,
    /// Implementation being compared.
    pub variant: String,
}

impl BenchmarkId {
    /// Create an identifier from its three parts.
    pub fn new(
        subject: impl Into<String>,
        test: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            test: test.into(),
            variant: variant.into(),
        }
    }

    /// Split `token` on `_` into exactly three segments.
    ///
    /// Segments may be empty; only the count is checked.
    ///
    /// # Errors
    ///
    /// Returns an `Identifier` error when the token has fewer or more than
    /// three segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtab::BenchmarkId;
    ///
    /// let id = BenchmarkId::parse("small_u8_rdxsort", 1).unwrap();
    /// assert_eq!(id, BenchmarkId::new("small", "u8", "rdxsort"));
    ///
    /// assert!(BenchmarkId::parse("small_u8", 1).is_err());
    /// ```
    pub fn parse(token: &str, line: usize) -> Result<Self> {
        let segments: Vec<&str> = token.split('_').collect();
        match segments.as_slice() {
            [subject, test, variant] => Ok(Self::new(*subject, *test, *variant)),
            _ => Err(BenchError::identifier(
                format!(
                    "expected 3 '_'-separated segments, found {} in '{}'",
                    segments.len(),
                    token
                ),
                line,
            )),
        }
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.subject, self.test, self.variant)
    }
}

/// One measured benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    pub id: BenchmarkId,
    pub value: u64,
}

/// Parse the metric that follows the first `:` in `content`.
///
/// Thousands separators are stripped, so `"bench: 12,345 ns/iter"` yields
/// `12345`.
///
/// # Errors
///
/// Returns a `Metric` error if there is no `:`, the field is empty, or the
/// field is not a non-negative integer.
pub fn parse_metric(content: &str, line: usize) -> Result<u64> {
    let field = content
        .split(':')
        .nth(1)
        .ok_or_else(|| BenchError::metric("missing ':' before metric", line))?;

    let raw = field.trim().split(' ').next().unwrap_or("");
    let digits = raw.replace(',', "");
    if digits.is_empty() {
        return Err(BenchError::metric("empty metric field", line));
    }

    digits
        .parse::<u64>()
        .map_err(|e| BenchError::metric(format!("invalid metric '{}': {}", raw, e), line))
}

/// Parse one log line.
///
/// The line is trimmed first. Lines that do not start with [`MARKER`] yield
/// `Ok(None)`; marker lines either yield a record or fail.
///
/// # Examples
///
/// ```
/// use benchtab::parse_line;
///
/// let rec = parse_line("test unstable::bench_alpha_fast_v1 ... bench: 1,500 ns/iter (+/- 3)", 1)
///     .unwrap()
///     .unwrap();
/// assert_eq!(rec.id.variant, "v1");
/// assert_eq!(rec.value, 1500);
///
/// assert!(parse_line("running 12 tests", 2).unwrap().is_none());
/// ```
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<BenchRecord>> {
    let content = match line.trim().strip_prefix(MARKER) {
        Some(content) => content,
        None => return Ok(None),
    };

    let token = content.split(char::is_whitespace).next().unwrap_or("");
    let id = BenchmarkId::parse(token, line_no)?;
    let value = parse_metric(content, line_no)?;

    Ok(Some(BenchRecord { id, value }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchErrorKind;

    #[test]
    fn test_parse_harness_line() {
        let rec = parse_line(
            "test unstable::bench_medium_i32_quicksort ... bench:     341,921 ns/iter (+/- 12,004)",
            3,
        )
        .unwrap()
        .unwrap();
        assert_eq!(rec.id, BenchmarkId::new("medium", "i32", "quicksort"));
        assert_eq!(rec.value, 341_921);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let rec = parse_line("   test unstable::bench_a_b_c ... bench: 7 ns/iter\r\n", 1)
            .unwrap()
            .unwrap();
        assert_eq!(rec.value, 7);
    }

    #[test]
    fn test_non_marker_lines_are_skipped() {
        for line in [
            "",
            "running 3 tests",
            "test stable::bench_a_b_c ... bench: 1 ns/iter",
            "test result: ok. 0 passed; 0 failed; 3 ignored; 3 measured",
            "unstable::bench_a_b_c ... bench: 1 ns/iter",
        ] {
            assert!(parse_line(line, 1).unwrap().is_none(), "line: {line:?}");
        }
    }

    #[test]
    fn test_two_segment_identifier_fails() {
        let err = parse_line("test unstable::bench_alpha_fast ... bench: 1 ns/iter", 4)
            .unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Identifier);
        assert_eq!(err.line, 4);
        assert!(err.message.contains("found 2"));
    }

    #[test]
    fn test_four_segment_identifier_fails() {
        let err = parse_line("test unstable::bench_a_b_c_d ... bench: 1 ns/iter", 1).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Identifier);
        assert!(err.message.contains("found 4"));
    }

    #[test]
    fn test_empty_identifier_fails() {
        let err = parse_line("test unstable::bench_ a_b_c: 1", 1).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Identifier);
    }

    #[test]
    fn test_empty_segments_are_accepted() {
        let id = BenchmarkId::parse("a__c", 1).unwrap();
        assert_eq!(id, BenchmarkId::new("a", "", "c"));
    }

    #[test]
    fn test_missing_colon_fails() {
        let err = parse_line("test unstable::bench_a_b_c ... ignored", 9).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Metric);
        assert_eq!(err.line, 9);
    }

    #[test]
    fn test_non_numeric_metric_fails() {
        let err = parse_metric("a_b_c ... bench: fast ns/iter", 2).unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Metric);
        assert!(err.message.contains("'fast'"));
    }

    #[test]
    fn test_negative_metric_fails() {
        assert!(parse_metric("x: -5 ns/iter", 1).is_err());
    }

    #[test]
    fn test_empty_metric_fails() {
        let err = parse_metric("x:", 1).unwrap_err();
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_metric_uses_second_colon_segment_only() {
        assert_eq!(parse_metric("a: 1,000 ns: 99", 1).unwrap(), 1000);
    }

    #[test]
    fn test_identifier_display() {
        let id = BenchmarkId::new("large", "f64", "std");
        assert_eq!(id.to_string(), "large_f64_std");
    }
}
