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

//! Convert command - benchmark log to markdown table

use super::{read_input, same_file, write_output};
use crate::error::CliError;
use benchtab::{parse_str, render, RenderConfig};
use tracing::info;

/// Counts describing a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub subjects: usize,
    pub tests: usize,
    pub variants: usize,
    pub cells: usize,
}

/// Read the log at `input`, render it, and write the table to `output`.
///
/// The table is rendered completely before `output` is opened, so a failed
/// run never leaves a truncated or partial file behind.
///
/// # Errors
///
/// Returns `Err` if:
/// - `input` and `output` resolve to the same existing file
/// - The input cannot be read or is too large
/// - A marker line is malformed
/// - A row lacks a variant and the policy is `abort`
/// - The output cannot be written
///
/// # Examples
///
/// ```no_run
/// use benchtab::RenderConfig;
/// use benchtab_cli::commands::convert;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// let summary = convert("bench.log", "table.md", &RenderConfig::default())?;
/// println!("{} rows", summary.tests);
/// # Ok(())
/// # }
/// ```
pub fn convert(
    input: &str,
    output: &str,
    config: &RenderConfig,
) -> Result<ConvertSummary, CliError> {
    if same_file(input, output) {
        return Err(CliError::invalid_input("input and output are the same file"));
    }

    let content = read_input(input)?;
    let table = parse_str(&content)?;
    let rendered = render(&table, config)?;
    write_output(&rendered, output)?;

    let summary = ConvertSummary {
        subjects: table.subjects().count(),
        tests: table.subjects().map(|s| table.tests(s).count()).sum(),
        variants: table.variant_count(),
        cells: table.len(),
    };
    info!(
        input,
        output,
        subjects = summary.subjects,
        tests = summary.tests,
        variants = summary.variants,
        "benchmark table written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtab::MissingPolicy;
    use std::fs;
    use tempfile::TempDir;

    const LOG: &str = "\
running 3 tests
test unstable::bench_alpha_fast_v1 ... bench: 100 ns/iter (+/- 1)
test unstable::bench_alpha_fast_v2 ... bench: 50 ns/iter (+/- 1)
test unstable::bench_alpha_slow_v1 ... bench: 1,234,567 ns/iter (+/- 1)
";

    #[test]
    fn test_convert_writes_table() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bench.log");
        let output = dir.path().join("table.md");
        fs::write(&input, LOG).unwrap();

        let summary = convert(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(
            summary,
            ConvertSummary {
                subjects: 1,
                tests: 2,
                variants: 2,
                cells: 3
            }
        );
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "alpha:\n//! | `fast` | `100` | **`50`** |\n//! | `slow` | **`1,234,567`** | - |\n"
        );
    }

    #[test]
    fn test_failed_convert_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bench.log");
        let output = dir.path().join("table.md");
        fs::write(&input, LOG).unwrap();

        let config = RenderConfig {
            missing: MissingPolicy::Abort,
            ..RenderConfig::default()
        };
        let err = convert(input.to_str().unwrap(), output.to_str().unwrap(), &config).unwrap_err();

        assert!(matches!(err, CliError::Conversion(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bench.log");
        fs::write(&input, LOG).unwrap();
        let path = input.to_str().unwrap();

        let err = convert(path, path, &RenderConfig::default()).unwrap_err();

        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), LOG);
    }

    #[test]
    fn test_aliased_output_path_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bench.log");
        let alias = dir.path().join(".").join("bench.log");
        fs::write(&input, LOG).unwrap();

        let err = convert(
            input.to_str().unwrap(),
            alias.to_str().unwrap(),
            &RenderConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), LOG);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_output_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bench.log");
        let link = dir.path().join("table.md");
        fs::write(&input, LOG).unwrap();
        std::os::unix::fs::symlink(&input, &link).unwrap();

        let err = convert(
            input.to_str().unwrap(),
            link.to_str().unwrap(),
            &RenderConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), LOG);
    }
}
