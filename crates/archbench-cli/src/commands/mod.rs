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

//! CLI command implementations

mod collect;
mod env;
mod plot;
mod table;

pub use collect::collect;
pub use env::env;
pub use plot::plot;
pub use table::table;

use archbench::loader::{load, BenchmarkResultSet};
use std::path::Path;
use tracing::debug;

/// Loads one result file, mapping the error to the CLI's message type.
pub fn load_results(path: &str, label: Option<&str>) -> Result<BenchmarkResultSet, String> {
    let set = load(Path::new(path), label).map_err(|e| e.to_string())?;
    debug!(path, label = set.label(), benchmarks = set.len(), "loaded input");
    Ok(set)
}
