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

//! CLI command definitions and argument parsing.
//!
//! Commands are split into two categories, flattened so that every command
//! appears at the top level:
//!
//! - [`report`]: compare two result files (table, plot)
//! - [`results`]: produce result files and describe the host (collect, env)

mod report;
mod results;

use clap::Subcommand;

pub use report::ReportCommands;
pub use results::ResultCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (table, plot)
/// └── Results (collect, env)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Comparison commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Result production commands - flattened to appear at top level
    #[command(flatten)]
    Results(ResultCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a printable message when loading, comparing,
    /// rendering or writing fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Results(cmd) => cmd.execute(),
        }
    }
}
