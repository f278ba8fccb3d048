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

//! Comparison commands: both read two result files and report on the
//! benchmarks they share.

use crate::commands;
use archbench::config::{DEFAULT_PLOT_PATH, DEFAULT_PLOT_TITLE};
use clap::Subcommand;

/// Comparison commands.
///
/// Inputs may be result files (`.json`, `.json.gz`) or Criterion output
/// directories. Only benchmarks present in both inputs are reported.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Print a comparison table of two result files
    ///
    /// Shows the median of every common benchmark in one shared unit and
    /// how much faster the first input is. With --csv, prints min, median
    /// and max of both inputs plus the B/A ratio in seconds.
    Table {
        /// First result file (e.g. results/arm64.json)
        #[arg(value_name = "A")]
        a: String,

        /// Second result file (e.g. results/x86_64.json)
        #[arg(value_name = "B")]
        b: String,

        /// Label for the first file (default: file name without extension)
        #[arg(long)]
        a_label: Option<String>,

        /// Label for the second file (default: file name without extension)
        #[arg(long)]
        b_label: Option<String>,

        /// Output as CSV instead of a formatted table
        #[arg(long)]
        csv: bool,
    },

    /// Render a grouped bar chart of two result files
    ///
    /// Writes a PNG with two bars per common benchmark showing the mean
    /// time of each input.
    Plot {
        /// First result file (e.g. results/arm64.json)
        #[arg(value_name = "A")]
        a: String,

        /// Second result file (e.g. results/x86_64.json)
        #[arg(value_name = "B")]
        b: String,

        /// Output PNG path
        #[arg(short, long, default_value = DEFAULT_PLOT_PATH)]
        out: String,

        /// Chart title
        #[arg(short, long, default_value = DEFAULT_PLOT_TITLE)]
        title: String,

        /// TrueType font for chart text (default: $ARCHBENCH_FONT, then system fonts)
        #[arg(long, value_name = "TTF")]
        font: Option<String>,
    },
}

impl ReportCommands {
    /// Execute the comparison command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input cannot be loaded, the inputs share no
    /// benchmark, or the report cannot be produced.
    pub fn execute(self) -> Result<(), String> {
        match self {
            ReportCommands::Table {
                a,
                b,
                a_label,
                b_label,
                csv,
            } => commands::table(&a, &b, a_label.as_deref(), b_label.as_deref(), csv),
            ReportCommands::Plot {
                a,
                b,
                out,
                title,
                font,
            } => commands::plot(&a, &b, &out, &title, font.as_deref()),
        }
    }
}
