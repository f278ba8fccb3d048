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

//! Result loading.
//!
//! Turns a result file (or a Criterion output tree) into a
//! [`BenchmarkResultSet`]: a label plus one [`Stat`] per benchmark name.
//!
//! # Stat selection
//!
//! For every benchmark the statistics come from the first available source:
//!
//! 1. a precomputed summary holding min, median and max;
//! 2. order statistics over the pooled values of all timed runs
//!    (warm-up/calibration-only runs are skipped);
//! 3. the summary mean, used for min, median and max alike.
//!
//! A benchmark offering none of these is rejected.

use crate::config::DEFAULT_BASELINE;
use crate::error::{ReportError, Result};
use crate::format::criterion::{is_criterion_dir, read_criterion_dir};
use crate::format::{read_suite, BenchmarkEntry, SuiteDocument};
use crate::stats::Summary;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Timing statistics for one benchmark, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    /// Fastest sample.
    pub min: f64,
    /// Median sample.
    pub median: f64,
    /// Slowest sample.
    pub max: f64,
    /// Mean of all samples, when known.
    pub mean: Option<f64>,
}

impl Stat {
    /// Creates a stat without a mean.
    pub fn new(min: f64, median: f64, max: f64) -> Self {
        Self {
            min,
            median,
            max,
            mean: None,
        }
    }

    /// Sets the mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Stat whose every field is `value`.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value).with_mean(value)
    }

    /// Single representative value: the mean, or the median when unknown.
    pub fn representative(&self) -> f64 {
        self.mean.unwrap_or(self.median)
    }
}

/// Statistics of one result file, keyed by benchmark name.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResultSet {
    label: String,
    stats: BTreeMap<String, Stat>,
}

impl BenchmarkResultSet {
    /// Creates a result set from already computed stats.
    pub fn new(label: impl Into<String>, stats: BTreeMap<String, Stat>) -> Self {
        Self {
            label: label.into(),
            stats,
        }
    }

    /// Builds a result set from `(name, stat)` pairs; later duplicates win.
    pub fn from_pairs<I, S>(label: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Stat)>,
        S: Into<String>,
    {
        let stats = pairs.into_iter().map(|(n, s)| (n.into(), s)).collect();
        Self::new(label, stats)
    }

    /// Label naming this result set in reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stat of a benchmark.
    pub fn get(&self, name: &str) -> Option<&Stat> {
        self.stats.get(name)
    }

    /// Benchmark names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// `true` when no benchmarks were loaded.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterates `(name, stat)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stat)> {
        self.stats.iter().map(|(n, s)| (n.as_str(), s))
    }
}

/// Loads a result set from `path`.
///
/// `path` may be a suite file (`.json` or `.json.gz`) or a Criterion output
/// directory, read for its `new` baseline. Without an explicit `label` the
/// file name minus its extensions is used.
///
/// # Errors
///
/// Propagates read and parse errors unchanged; see [`stat_for_entry`] for
/// per-benchmark errors.
pub fn load(path: &Path, label: Option<&str>) -> Result<BenchmarkResultSet> {
    let doc = if is_criterion_dir(path) {
        read_criterion_dir(path, DEFAULT_BASELINE)?
    } else {
        read_suite(path)?
    };

    let label = label
        .map(str::to_string)
        .unwrap_or_else(|| default_label(path));
    from_document(&doc, label, path)
}

/// Converts a parsed suite into a result set.
pub fn from_document(
    doc: &SuiteDocument,
    label: impl Into<String>,
    source: &Path,
) -> Result<BenchmarkResultSet> {
    let mut stats = BTreeMap::new();
    for (index, entry) in doc.benchmarks.iter().enumerate() {
        let name = entry
            .name()
            .or_else(|| doc.name())
            .ok_or_else(|| ReportError::MissingName {
                path: source.to_path_buf(),
                index,
            })?;
        stats.insert(name.to_string(), stat_for_entry(name, entry)?);
    }

    let set = BenchmarkResultSet::new(label, stats);
    debug!(
        label = set.label(),
        benchmarks = set.len(),
        source = %source.display(),
        "loaded result set"
    );
    Ok(set)
}

/// Selects the [`Stat`] of one benchmark entry.
///
/// # Errors
///
/// Returns [`ReportError::NoSamples`] when the entry has no usable summary
/// and no timed values.
pub fn stat_for_entry(name: &str, entry: &BenchmarkEntry) -> Result<Stat> {
    let summary = entry.summary.unwrap_or_default();
    let pooled = Summary::from_samples(&entry.pooled_values());

    if let Some((min, median, max)) = summary.order_stats() {
        debug!(benchmark = name, "using precomputed summary");
        let mean = summary.mean.or(pooled.map(|p| p.mean));
        return Ok(Stat {
            min,
            median,
            max,
            mean,
        });
    }

    if let Some(p) = pooled {
        debug!(benchmark = name, samples = p.count, "computing stats from samples");
        return Ok(Stat {
            min: p.min,
            median: p.median,
            max: p.max,
            mean: summary.mean.or(Some(p.mean)),
        });
    }

    match summary.mean {
        Some(mean) => {
            debug!(benchmark = name, "no samples, using mean for all stats");
            Ok(Stat::uniform(mean))
        }
        None => Err(ReportError::NoSamples {
            name: name.to_string(),
        }),
    }
}

/// Default label for a path: the file name without any extension.
///
/// `results/arm64.json` and `results/arm64.json.gz` both yield `arm64`.
pub fn default_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if path.is_dir() {
        return name;
    }

    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    match stem.rfind('.') {
        Some(idx) if idx > 0 => stem[..idx].to_string(),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{RunEntry, SummaryEntry};

    #[test]
    fn test_summary_takes_precedence() {
        let entry = BenchmarkEntry::new("b")
            .with_values(vec![9.0, 9.0])
            .with_summary(SummaryEntry {
                min: Some(1.0),
                median: Some(2.0),
                max: Some(3.0),
                mean: None,
            });

        let stat = stat_for_entry("b", &entry).unwrap();
        assert_eq!((stat.min, stat.median, stat.max), (1.0, 2.0, 3.0));
        // mean still comes from the samples when the summary has none
        assert_eq!(stat.mean, Some(9.0));
    }

    #[test]
    fn test_pooled_values_skip_calibration_runs() {
        let mut entry = BenchmarkEntry::new("b");
        entry.runs.push(RunEntry {
            warmups: vec![serde_json::json!([1, 100.0])],
            ..RunEntry::default()
        });
        entry.runs.push(RunEntry {
            values: Some(vec![4.0, 1.0]),
            ..RunEntry::default()
        });
        entry.runs.push(RunEntry {
            values: Some(vec![3.0, 2.0]),
            ..RunEntry::default()
        });

        let stat = stat_for_entry("b", &entry).unwrap();
        assert_eq!(stat.min, 1.0);
        assert_eq!(stat.median, 2.5);
        assert_eq!(stat.max, 4.0);
        assert_eq!(stat.mean, Some(2.5));
    }

    #[test]
    fn test_partial_summary_falls_back_to_samples() {
        let entry = BenchmarkEntry::new("b")
            .with_values(vec![1.0, 2.0, 6.0])
            .with_summary(SummaryEntry {
                median: Some(100.0),
                mean: Some(3.5),
                ..SummaryEntry::default()
            });

        let stat = stat_for_entry("b", &entry).unwrap();
        assert_eq!(stat.median, 2.0);
        assert_eq!(stat.mean, Some(3.5));
    }

    #[test]
    fn test_mean_only() {
        let entry = BenchmarkEntry::new("b").with_summary(SummaryEntry {
            mean: Some(0.25),
            ..SummaryEntry::default()
        });

        let stat = stat_for_entry("b", &entry).unwrap();
        assert_eq!(stat, Stat::uniform(0.25));
    }

    #[test]
    fn test_no_data_is_error() {
        let entry = BenchmarkEntry::new("empty");
        let err = stat_for_entry("empty", &entry).unwrap_err();
        assert_eq!(
            err,
            ReportError::NoSamples {
                name: "empty".to_string()
            }
        );
    }

    #[test]
    fn test_suite_name_used_when_entry_unnamed() {
        let mut doc = SuiteDocument::new();
        doc.set_metadata("name", "solo");
        doc.benchmarks.push(BenchmarkEntry {
            runs: vec![RunEntry {
                values: Some(vec![1.0]),
                ..RunEntry::default()
            }],
            ..BenchmarkEntry::default()
        });

        let set = from_document(&doc, "x", Path::new("x.json")).unwrap();
        assert!(set.get("solo").is_some());
    }

    #[test]
    fn test_unnamed_entry_is_error() {
        let mut doc = SuiteDocument::new();
        doc.benchmarks.push(BenchmarkEntry::default().with_values(vec![1.0]));

        let err = from_document(&doc, "x", Path::new("x.json")).unwrap_err();
        assert!(matches!(err, ReportError::MissingName { index: 0, .. }));
    }

    #[test]
    fn test_default_label() {
        assert_eq!(default_label(Path::new("results/arm64.json")), "arm64");
        assert_eq!(default_label(Path::new("results/arm64.json.gz")), "arm64");
        assert_eq!(default_label(Path::new("x86_64")), "x86_64");
        assert_eq!(default_label(Path::new("graviton.3.json")), "graviton.3");
        assert_eq!(default_label(Path::new(".hidden")), ".hidden");
    }

    #[test]
    fn test_representative_prefers_mean() {
        assert_eq!(Stat::new(1.0, 2.0, 3.0).representative(), 2.0);
        assert_eq!(Stat::new(1.0, 2.0, 3.0).with_mean(2.5).representative(), 2.5);
    }
}
