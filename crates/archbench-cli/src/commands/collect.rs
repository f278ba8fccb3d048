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

//! Collect command - package a Criterion tree into a result file

use archbench::config::CollectConfig;
use archbench::format::write_suite;
use archbench::loader::default_label;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Read a Criterion output tree and write it as one portable result file.
///
/// The label defaults to the machine architecture, and the output path to
/// `results/<label>.json`.
///
/// # Errors
///
/// Returns `Err` if the tree cannot be read or the output cannot be written.
pub fn collect(
    criterion_dir: &str,
    out: Option<&str>,
    label: Option<&str>,
    baseline: &str,
) -> Result<(), String> {
    let label = label
        .map(str::to_string)
        .unwrap_or_else(|| std::env::consts::ARCH.to_string());
    let out = out
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("results").join(format!("{}.json", label)));

    if default_label(&out) != label {
        warn!(
            out = %out.display(),
            label = %label,
            "output file name differs from label; comparisons label inputs by file name"
        );
    }

    let config = CollectConfig::default()
        .with_baseline(baseline)
        .with_label(label);
    let doc = archbench::collect(Path::new(criterion_dir), &config).map_err(|e| e.to_string())?;
    write_suite(&doc, &out).map_err(|e| e.to_string())?;

    println!(
        "{} {} benchmarks to {}",
        "Collected".green().bold(),
        doc.benchmarks.len(),
        out.display()
    );
    Ok(())
}
