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

//! Table command - text or CSV comparison of two result files

use super::load_results;
use archbench::reporters::print_table;
use archbench::ReportError;

/// Compare two result files and print a table (or CSV) to stdout.
///
/// # Arguments
///
/// * `a` - Path to the baseline result file or Criterion directory
/// * `b` - Path to the result file compared against `a`
/// * `a_label` - Label for `a`; defaults to its file name without extension
/// * `b_label` - Label for `b`; defaults to its file name without extension
/// * `csv` - Print CSV instead of the fixed-width table
///
/// # Errors
///
/// Returns `Err` if either input cannot be loaded, or if the two inputs
/// share no benchmark. In the latter case the diagnostic has already been
/// printed to stdout.
///
/// # Examples
///
/// ```no_run
/// use archbench_cli::commands::table;
///
/// # fn main() -> Result<(), String> {
/// table("results/arm64.json", "results/x86_64.json", None, None, false)?;
/// # Ok(())
/// # }
/// ```
pub fn table(
    a: &str,
    b: &str,
    a_label: Option<&str>,
    b_label: Option<&str>,
    csv: bool,
) -> Result<(), String> {
    let a = load_results(a, a_label)?;
    let b = load_results(b, b_label)?;

    let printed = print_table(&a, &b, a.label(), b.label(), csv).map_err(|e| e.to_string())?;
    if !printed {
        return Err(ReportError::NoCommonBenchmarks {
            a: a.label().to_string(),
            b: b.label().to_string(),
        }
        .to_string());
    }
    Ok(())
}
