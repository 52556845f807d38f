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

//! Markdown table rendering.
//!
//! Output is a block per subject: a `<subject>:` line followed by one
//! table row per test, with one cell per known variant. The smallest value
//! of each row is rendered in bold.
//!
//! ```text
//! alpha:
//! //! | `fast` | `100` | **`50`** |
//! //! | `slow` | **`5,000`** | **`5,000`** |
//! ```

use crate::error::{BenchError, Result};
use crate::table::{ResultTable, Row};
use std::fmt::{self, Write};
use std::str::FromStr;
use tracing::warn;

/// What to do with a row that has no value for some known variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Render the configured placeholder text in the empty cell.
    #[default]
    Placeholder,
    /// Leave the row out.
    Skip,
    /// Fail with a `MissingVariant` error.
    Abort,
}

impl MissingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Skip => "skip",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!(
                "unknown missing-variant policy '{}' (expected placeholder, skip or abort)",
                other
            )),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text written before every table row (not before subject lines).
    pub row_prefix: String,
    /// Missing cell handling.
    pub missing: MissingPolicy,
    /// Cell text used by [`MissingPolicy::Placeholder`].
    pub placeholder: String,
    /// Emit a column header and alignment row under each subject line.
    pub header: bool,
    /// First column title when `header` is set.
    pub label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            row_prefix: "//! ".to_string(),
            missing: MissingPolicy::default(),
            placeholder: "-".to_string(),
            header: false,
            label: "test".to_string(),
        }
    }
}

/// Format an integer with `,` between groups of three digits.
///
/// # Examples
///
/// ```
/// use benchtab::format_thousands;
///
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render `table` into a new string.
///
/// # Errors
///
/// Fails only under [`MissingPolicy::Abort`] when a row lacks a variant.
pub fn render(table: &ResultTable, config: &RenderConfig) -> Result<String> {
    let mut out = String::new();
    render_to(table, config, &mut out)?;
    Ok(out)
}

/// Render `table` into any [`fmt::Write`] sink.
pub fn render_to<W: Write>(
    table: &ResultTable,
    config: &RenderConfig,
    out: &mut W,
) -> Result<()> {
    let variants: Vec<&str> = table.variants().collect();

    for subject in table.subjects() {
        let mut rows = Vec::new();
        for row in table.rows(subject) {
            let missing: Vec<&str> = variants
                .iter()
                .copied()
                .filter(|v| row.get(v).is_none())
                .collect();

            if missing.is_empty() {
                rows.push(row);
                continue;
            }

            match config.missing {
                MissingPolicy::Abort => {
                    return Err(BenchError::missing_variant(subject, row.test, missing[0]));
                }
                MissingPolicy::Skip => {
                    warn!(subject, test = row.test, ?missing, "row skipped, variants missing");
                }
                MissingPolicy::Placeholder => {
                    warn!(
                        subject,
                        test = row.test,
                        ?missing,
                        "variants missing, using placeholder"
                    );
                    rows.push(row);
                }
            }
        }

        if rows.is_empty() {
            continue;
        }

        writeln!(out, "{}:", subject)?;
        if config.header {
            write_header(out, config, &variants)?;
        }
        for row in rows {
            write_row(out, config, &variants, row)?;
        }
    }

    Ok(())
}

fn write_header<W: Write>(out: &mut W, config: &RenderConfig, variants: &[&str]) -> fmt::Result {
    write!(out, "{}| {} |", config.row_prefix, config.label)?;
    for variant in variants {
        write!(out, " {} |", variant)?;
    }
    out.write_char('\n')?;

    write!(out, "{}|", config.row_prefix)?;
    for title in std::iter::once(config.label.as_str()).chain(variants.iter().copied()) {
        write!(out, "{}:|", "-".repeat(title.chars().count() + 1))?;
    }
    out.write_char('\n')
}

fn write_row<W: Write>(
    out: &mut W,
    config: &RenderConfig,
    variants: &[&str],
    row: Row<'_>,
) -> fmt::Result {
    write!(out, "{}| `{}` |", config.row_prefix, row.test)?;
    let best = row.best();
    for variant in variants {
        match row.get(variant) {
            Some(value) if Some(value) == best => {
                write!(out, " **`{}`** |", format_thousands(value))?
            }
            Some(value) => write!(out, " `{}` |", format_thousands(value))?,
            None => write!(out, " {} |", config.placeholder)?,
        }
    }
    out.write_char('\n')
}
