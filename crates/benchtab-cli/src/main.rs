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

//! Benchtab Command Line Interface

use benchtab_cli::cli::ConvertArgs;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Benchtab - benchmark log to markdown table converter
///
/// Reads `test unstable::bench_<subject>_<test>_<variant>` lines from a
/// `cargo bench` log and writes one table row per test with one column per
/// variant, the fastest result in bold.
///
/// # Examples
///
/// ```bash
/// benchtab bench.log table.md
/// benchtab --missing abort bench.log table.md
/// ```
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, long_about = None)]
#[command(about = "Benchtab - benchmark log to markdown table converter")]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benchtab=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
