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

//! Archbench Comparison Library
//!
//! Loads two benchmark result files, pairs up the benchmarks they share and
//! reports how B's timings relate to A's.
//!
//! ## Features
//!
//! - **Loading**: pyperf-compatible JSON suites (optionally gzipped) and
//!   Criterion output trees
//! - **Comparison**: sorted name intersection and median ratios
//! - **Reporting**: fixed-width table, CSV export and a PNG bar chart
//! - **Collection**: package a Criterion tree with host metadata into one
//!   portable result file
//!
//! ## Usage
//!
//! ```no_run
//! use archbench::{load, render_table};
//! use std::path::Path;
//!
//! let a = load(Path::new("results/arm64.json"), None)?;
//! let b = load(Path::new("results/x86_64.json"), None)?;
//! if let Some(table) = render_table(&a, &b, a.label(), b.label()) {
//!     print!("{}", table);
//! }
//! # Ok::<(), archbench::ReportError>(())
//! ```

pub mod collect;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod metadata;
pub mod reporters;
pub mod stats;
pub mod units;

pub use collect::collect;
pub use compare::{common_names, compare, ratio, ComparisonRow};
pub use config::{CollectConfig, PlotConfig};
pub use error::{ReportError, Result};
pub use format::{read_suite, write_suite, SuiteDocument};
pub use loader::{load, BenchmarkResultSet, Stat};
pub use metadata::{collect_metadata, EnvironmentMetadata};
pub use reporters::{print_table, render_csv, render_plot, render_table};
pub use units::TimeUnit;
