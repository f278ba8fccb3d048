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

//! Archbench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Comparison
//!
//! - **table**: Print a fixed-width table or CSV comparing two result files
//! - **plot**: Render a grouped bar chart of two result files to PNG
//!
//! ## Result Files
//!
//! - **collect**: Package a Criterion output tree with host metadata
//! - **env**: Print the host metadata
//!
//! # Examples
//!
//! ```no_run
//! use archbench_cli::commands::table;
//!
//! # fn main() -> Result<(), String> {
//! // Human-readable table, labels taken from the file names
//! table("results/arm64.json", "results/x86_64.json", None, None, false)?;
//!
//! // CSV with explicit labels
//! table("a.json", "b.json", Some("graviton3"), Some("icelake"), true)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
