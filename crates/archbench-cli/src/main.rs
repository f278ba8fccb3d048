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

//! Archbench Command Line Interface
//!
//! # Usage
//!
//! ```bash
//! # Package Criterion results on each machine
//! archbench collect target/criterion --label arm64
//!
//! # Compare them anywhere
//! archbench table results/arm64.json results/x86_64.json
//! archbench plot results/arm64.json results/x86_64.json --out results/compare.png
//!
//! # With debug logging
//! RUST_LOG=archbench=debug archbench table a.json b.json
//! ```

use archbench_cli::cli::Commands;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Archbench - cross-architecture benchmark comparison
///
/// Compares benchmark result files recorded on different machines and
/// reports the benchmarks they share as a table, CSV or bar chart.
#[derive(Parser)]
#[command(name = "archbench")]
#[command(author, version, about = "Archbench - cross-architecture benchmark comparison", long_about = None)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

const DEFAULT_LOG_FILTER: &str = "archbench=warn,archbench_cli=warn";
const VERBOSE_LOG_FILTER: &str = "archbench=debug,archbench_cli=debug";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
