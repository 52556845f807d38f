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

//! Aggregation of parsed records into a subject / test / variant table.
//!
//! All three levels are `BTreeMap`s, so iteration is already in the
//! lexicographic order the renderer needs.

use crate::error::{BenchError, Result};
use crate::record::{parse_line, BenchRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use tracing::debug;

/// Variant name to metric value for a single test.
pub type Cells = BTreeMap<String, u64>;

/// Three-level result table plus the set of every variant observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    subjects: BTreeMap<String, BTreeMap<String, Cells>>,
    variants: BTreeSet<String>,
}

/// A view of one `(subject, test)` row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub test: &'a str,
    pub cells: &'a Cells,
}

impl Row<'_> {
    /// Minimum over the recorded cells, `None` for an empty row.
    pub fn best(&self) -> Option<u64> {
        self.cells.values().copied().min()
    }

    pub fn get(&self, variant: &str) -> Option<u64> {
        self.cells.get(variant).copied()
    }
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier value for the same key.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, record: BenchRecord) -> Option<u64> {
        let BenchRecord { id, value } = record;
        self.variants.insert(id.variant.clone());

        let cells = self
            .subjects
            .entry(id.subject.clone())
            .or_default()
            .entry(id.test.clone())
            .or_default();
        let previous = cells.insert(id.variant.clone(), value);

        if let Some(old) = previous {
            debug!(
                subject = %id.subject,
                test = %id.test,
                variant = %id.variant,
                old,
                new = value,
                "benchmark result overwritten"
            );
        }
        previous
    }

    pub fn get(&self, subject: &str, test: &str, variant: &str) -> Option<u64> {
        self.subjects.get(subject)?.get(test)?.get(variant).copied()
    }

    /// Subjects in ascending order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Tests of `subject` in ascending order; empty for unknown subjects.
    pub fn tests<'a>(&'a self, subject: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.subjects
            .get(subject)
            .into_iter()
            .flat_map(|tests| tests.keys().map(String::as_str))
    }

    /// Every variant seen anywhere in the input, in ascending order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Rows of `subject` in ascending test order.
    pub fn rows<'a>(&'a self, subject: &str) -> impl Iterator<Item = Row<'a>> + 'a {
        self.subjects.get(subject).into_iter().flat_map(|tests| {
            tests.iter().map(|(test, cells)| Row {
                test: test.as_str(),
                cells,
            })
        })
    }

    /// Number of recorded cells.
    pub fn len(&self) -> usize {
        self.subjects
            .values()
            .flat_map(|tests| tests.values())
            .map(|cells| cells.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Extend<BenchRecord> for ResultTable {
    fn extend<I: IntoIterator<Item = BenchRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<BenchRecord> for ResultTable {
    fn from_iter<I: IntoIterator<Item = BenchRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Build a table from log text in one forward pass.
///
/// # Errors
///
/// Fails on the first malformed marker line; no partial table is returned.
///
/// # Examples
///
/// ```
/// use benchtab::parse_str;
///
/// let log = "\
/// running 2 tests
/// test unstable::bench_alpha_fast_v1 ... bench: 100 ns/iter (+/- 1)
/// test unstable::bench_alpha_fast_v2 ... bench: 50 ns/iter (+/- 1)
/// ";
/// let table = parse_str(log).unwrap();
/// assert_eq!(table.get("alpha", "fast", "v2"), Some(50));
/// assert_eq!(table.len(), 2);
/// ```
pub fn parse_str(input: &str) -> Result<ResultTable> {
    let mut builder = Builder::default();
    for (idx, line) in input.lines().enumerate() {
        builder.feed(line, idx + 1)?;
    }
    Ok(builder.finish())
}

/// Build a table from a buffered reader in one forward pass.
///
/// # Errors
///
/// Fails on a read error or on the first malformed marker line.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ResultTable> {
    let mut builder = Builder::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| BenchError::io(e.to_string(), line_no))?;
        builder.feed(&line, line_no)?;
    }
    Ok(builder.finish())
}

#[derive(Default)]
struct Builder {
    table: ResultTable,
    accepted: usize,
    skipped: usize,
}

impl Builder {
    fn feed(&mut self, line: &str, line_no: usize) -> Result<()> {
        match parse_line(line, line_no)? {
            Some(record) => {
                self.accepted += 1;
                self.table.insert(record);
            }
            None => self.skipped += 1,
        }
        Ok(())
    }

    fn finish(self) -> ResultTable {
        debug!(
            accepted = self.accepted,
            skipped = self.skipped,
            cells = self.table.len(),
            "benchmark log parsed"
        );
        self.table
    }
}
