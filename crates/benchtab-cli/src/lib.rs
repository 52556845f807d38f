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

//! Benchtab CLI library for argument parsing and execution.
//!
//! The `benchtab` binary reads `cargo bench` output and writes a markdown
//! comparison table ready to paste into `//!` doc comments.
//!
//! # Usage
//!
//! ```bash
//! cargo bench --features unstable 2>&1 | tee bench.log
//! benchtab bench.log table.md
//!
//! # Pipe through, with a header row per subject
//! cargo bench --features unstable | benchtab --header --label type - -
//! ```
//!
//! # Configuration
//!
//! - `BENCHTAB_MAX_FILE_SIZE`: maximum input size in bytes (default 1 GB)
//! - `RUST_LOG`: log filter for diagnostics on stderr (default `benchtab=warn`)
//!
//! # Error Handling
//!
//! All commands return `Result<T, CliError>`. The first malformed
//! benchmark line aborts the run and no output file is written.

pub mod cli;
pub mod commands;
pub mod error;
