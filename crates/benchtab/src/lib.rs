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

//! Benchtab
//!
//! Turns `cargo bench` harness output into markdown comparison tables,
//! one row per benchmark case and one column per implementation, with the
//! fastest result of each row in bold.
//!
//! ## Quick Start
//!
//! ```rust
//! use benchtab::{convert, RenderConfig};
//!
//! let log = "\
//! test unstable::bench_alpha_fast_v1    ... bench: 100 ns/iter (+/- 1)
//! test unstable::bench_alpha_fast_v2    ... bench: 50 ns/iter (+/- 1)
//! ";
//!
//! let table = convert(log, &RenderConfig::default()).unwrap();
//! assert_eq!(table, "alpha:\n//! | `fast` | `100` | **`50`** |\n");
//! ```
//!
//! ## Step by Step
//!
//! ```rust
//! use benchtab::{parse_str, render, MissingPolicy, RenderConfig};
//!
//! let log = "\
//! test unstable::bench_alpha_fast_v1 ... bench: 100 ns/iter (+/- 1)
//! test unstable::bench_alpha_slow_v2 ... bench: 90 ns/iter (+/- 1)
//! ";
//!
//! let table = parse_str(log).unwrap();
//! assert_eq!(table.variants().collect::<Vec<_>>(), ["v1", "v2"]);
//!
//! let config = RenderConfig {
//!     missing: MissingPolicy::Abort,
//!     ..RenderConfig::default()
//! };
//! assert!(render(&table, &config).is_err());
//! ```

mod error;
mod record;
mod render;
mod table;

pub use error::{BenchError, BenchErrorKind, Result};
pub use record::{parse_line, parse_metric, BenchRecord, BenchmarkId, MARKER};
pub use render::{format_thousands, render, render_to, MissingPolicy, RenderConfig};
pub use table::{parse_reader, parse_str, Cells, ResultTable, Row};

/// Parse a whole log and render it in one call.
pub fn convert(input: &str, config: &RenderConfig) -> Result<String> {
    let table = parse_str(input)?;
    render(&table, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_propagates_parse_errors() {
        let err = convert("test unstable::bench_a_b_c ... no metric", &RenderConfig::default())
            .unwrap_err();
        assert_eq!(err.kind, BenchErrorKind::Metric);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_convert_ignores_noise() {
        let out = convert("running 0 tests\n\ntest result: ok\n", &RenderConfig::default())
            .unwrap();
        assert!(out.is_empty());
    }
}
