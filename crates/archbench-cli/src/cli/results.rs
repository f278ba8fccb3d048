// Dweve Archbench - Cross-Architecture Benchmark Comparison
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

//! Commands that produce result files or describe the host.

use crate::commands;
use archbench::config::DEFAULT_BASELINE;
use clap::Subcommand;

/// Result production commands.
#[derive(Subcommand)]
pub enum ResultCommands {
    /// Package a Criterion output tree into one result file
    ///
    /// Reads every benchmark under CRITERION_DIR (usually target/criterion),
    /// adds min/median/max/mean summaries and host metadata, and writes a
    /// JSON result file that `table` and `plot` can compare on any machine.
    /// Paths ending in .gz are gzip-compressed.
    Collect {
        /// Criterion output directory
        #[arg(value_name = "CRITERION_DIR")]
        criterion_dir: String,

        /// Output path (default: results/<label>.json)
        #[arg(short, long)]
        out: Option<String>,

        /// Label stored in the file (default: the machine architecture)
        #[arg(short, long)]
        label: Option<String>,

        /// Criterion baseline to read
        #[arg(long, default_value = DEFAULT_BASELINE)]
        baseline: String,
    },

    /// Print the host metadata recorded by `collect`
    Env {
        /// Print as a JSON object
        #[arg(long)]
        json: bool,
    },
}

impl ResultCommands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading or writing fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            ResultCommands::Collect {
                criterion_dir,
                out,
                label,
                baseline,
            } => commands::collect(&criterion_dir, out.as_deref(), label.as_deref(), &baseline),
            ResultCommands::Env { json } => commands::env(json),
        }
    }
}
