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

//! Command-line argument definitions.

use crate::commands;
use crate::error::CliError;
use benchtab::{MissingPolicy, RenderConfig};
use clap::Args;

/// Arguments of the convert invocation.
///
/// With only `INPUT` and `OUTPUT` given the output is the plain table
/// format; every option defaults to that behavior.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Benchmark log to read ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Table file to write ("-" for stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// What to do when a test lacks a result for some variant
    /// (placeholder, skip, abort)
    #[arg(short, long, value_name = "POLICY", default_value = "placeholder")]
    pub missing: MissingPolicy,

    /// Cell text for missing results with the placeholder policy
    #[arg(long, value_name = "TEXT", default_value = "-")]
    pub placeholder: String,

    /// Text written before every table row
    #[arg(long, value_name = "TEXT", default_value = "//! ")]
    pub prefix: String,

    /// Emit a column header and alignment row for each subject
    #[arg(long)]
    pub header: bool,

    /// First column title used with --header
    #[arg(long, value_name = "TEXT", default_value = "test")]
    pub label: String,
}

impl ConvertArgs {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            row_prefix: self.prefix.clone(),
            missing: self.missing,
            placeholder: self.placeholder.clone(),
            header: self.header,
            label: self.label.clone(),
        }
    }

    /// Run the conversion.
    pub fn execute(self) -> Result<(), CliError> {
        let config = self.render_config();
        commands::convert(&self.input, &self.output, &config).map(|_| ())
    }
}
