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

//! Reader for Criterion output trees.
//!
//! Criterion stores one directory per benchmark under `target/criterion`,
//! each holding a baseline directory (`new` by default) with:
//!
//! - `benchmark.json`: identifiers, `full_id` is used as the benchmark name
//! - `sample.json`: `iters[i]` iterations took `times[i]` nanoseconds
//! - `estimates.json`: bootstrap point estimates in nanoseconds
//!
//! The tree is converted into a [`SuiteDocument`] whose values are
//! per-iteration seconds and whose summary carries Criterion's mean.

use super::{BenchmarkEntry, SuiteDocument, SummaryEntry};
use crate::error::{ReportError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const NANOS_PER_SECOND: f64 = 1e9;

#[derive(Debug, Deserialize)]
struct BenchmarkId {
    full_id: String,
}

#[derive(Debug, Deserialize)]
struct Sample {
    iters: Vec<f64>,
    times: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

/// `true` when `path` looks like a Criterion output tree.
pub fn is_criterion_dir(path: &Path) -> bool {
    path.is_dir()
}

/// Reads every benchmark recorded under `root` for `baseline`.
///
/// Benchmarks are returned sorted by name. Directories without a
/// `benchmark.json` for the requested baseline are ignored, as are the HTML
/// `report` directories.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if `root` cannot be listed and
/// [`ReportError::Parse`] if a Criterion JSON file is malformed.
pub fn read_criterion_dir(root: &Path, baseline: &str) -> Result<SuiteDocument> {
    let mut dirs = Vec::new();
    find_baseline_dirs(root, baseline, &mut dirs)?;

    let mut benchmarks = Vec::with_capacity(dirs.len());
    for dir in &dirs {
        benchmarks.push(read_benchmark(dir)?);
    }
    benchmarks.sort_by(|a, b| a.name().cmp(&b.name()));

    if benchmarks.is_empty() {
        warn!(
            root = %root.display(),
            baseline,
            "no Criterion benchmarks found"
        );
    }
    debug!(root = %root.display(), count = benchmarks.len(), "read Criterion tree");

    let mut doc = SuiteDocument::new();
    doc.set_metadata("criterion.baseline", baseline);
    doc.benchmarks = benchmarks;
    Ok(doc)
}

fn find_baseline_dirs(dir: &Path, baseline: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::io_error(dir, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io_error(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            children.push(path);
        }
    }
    children.sort();

    for child in children {
        let name = child.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name == "report" {
            continue;
        }
        if name == baseline && child.join("benchmark.json").is_file() {
            found.push(child);
        } else {
            find_baseline_dirs(&child, baseline, found)?;
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read(path).map_err(|e| ReportError::io_error(path, e))?;
    serde_json::from_slice(&content).map_err(|e| ReportError::parse(path, e))
}

fn read_benchmark(dir: &Path) -> Result<BenchmarkEntry> {
    let id: BenchmarkId = read_json(&dir.join("benchmark.json"))?;
    let mut entry = BenchmarkEntry::new(id.full_id);

    let sample_path = dir.join("sample.json");
    if sample_path.is_file() {
        let sample: Sample = read_json(&sample_path)?;
        entry = entry.with_values(per_iteration_seconds(&sample));
    }

    let estimates_path = dir.join("estimates.json");
    if estimates_path.is_file() {
        let estimates: Estimates = read_json(&estimates_path)?;
        entry = entry.with_summary(SummaryEntry {
            mean: Some(estimates.mean.point_estimate / NANOS_PER_SECOND),
            ..SummaryEntry::default()
        });
    }

    Ok(entry)
}

fn per_iteration_seconds(sample: &Sample) -> Vec<f64> {
    sample
        .iters
        .iter()
        .zip(&sample.times)
        .filter(|(iters, _)| **iters > 0.0)
        .map(|(iters, time_ns)| time_ns / iters / NANOS_PER_SECOND)
        .collect()
}
