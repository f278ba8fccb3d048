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

//! On-disk result model.
//!
//! Result files use the pyperf JSON suite layout so that files produced by
//! either tool can be compared:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "metadata": {"label": "arm64"},
//!   "benchmarks": [
//!     {
//!       "metadata": {"name": "scalar/int_loop_add[1e5]"},
//!       "runs": [
//!         {"warmups": [[1, 0.0021]]},
//!         {"values": [0.0020, 0.0019, 0.0021]}
//!       ],
//!       "summary": {"min": 0.0019, "median": 0.0020, "max": 0.0021, "mean": 0.0020}
//!     }
//!   ]
//! }
//! ```
//!
//! The per-benchmark `summary` block is optional and only written by
//! `archbench collect`; pyperf ignores it. All times are in seconds. Files
//! whose name ends in `.gz` are gzip-compressed.

pub mod criterion;

use crate::config::max_file_size;
use crate::error::{ReportError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Suite format version written by this crate.
pub const FORMAT_VERSION: &str = "1.0";

fn default_version() -> String {
    FORMAT_VERSION.to_string()
}

/// A whole result file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteDocument {
    /// Format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Suite-wide metadata (environment description, label, timestamp).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
    /// Benchmark entries in file order.
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkEntry>,
}

impl SuiteDocument {
    /// Creates an empty suite.
    pub fn new() -> Self {
        Self {
            version: default_version(),
            ..Self::default()
        }
    }

    /// Suite-level benchmark name, used by single-benchmark pyperf files.
    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(Value::as_str)
    }

    /// Sets a string metadata value.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), Value::String(value.into()));
    }
}

/// One named benchmark inside a suite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Per-benchmark metadata; `name` identifies the benchmark.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
    /// Recorded runs, including warm-up/calibration-only runs.
    #[serde(default)]
    pub runs: Vec<RunEntry>,
    /// Precomputed statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryEntry>,
}

impl BenchmarkEntry {
    /// Creates an entry with the given name and no runs.
    pub fn new(name: impl Into<String>) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("name".to_string(), Value::String(name.into()));
        Self {
            metadata,
            runs: Vec::new(),
            summary: None,
        }
    }

    /// Appends a run holding timed values.
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.runs.push(RunEntry {
            values: Some(values),
            ..RunEntry::default()
        });
        self
    }

    /// Attaches a precomputed summary.
    pub fn with_summary(mut self, summary: SummaryEntry) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Benchmark name from the entry metadata.
    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(Value::as_str)
    }

    /// Timed values of every run that recorded any, in file order.
    ///
    /// Runs holding only warm-up or calibration samples are skipped.
    pub fn pooled_values(&self) -> Vec<f64> {
        self.runs
            .iter()
            .filter(|run| !run.is_calibration_only())
            .filter_map(|run| run.values.as_deref())
            .flatten()
            .copied()
            .collect()
    }
}

/// One process run of a benchmark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Run metadata (loops, durations, calibration details).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
    /// Warm-up samples as `[loops, seconds]` pairs; never used for statistics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warmups: Vec<Value>,
    /// Timed samples in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl RunEntry {
    /// `true` when the run recorded no timed values.
    pub fn is_calibration_only(&self) -> bool {
        self.values.as_ref().map_or(true, Vec::is_empty)
    }
}

/// Precomputed statistics in seconds. Any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Fastest sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Median sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    /// Slowest sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Mean of all samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

impl SummaryEntry {
    /// Returns `(min, median, max)` when all three are present.
    pub fn order_stats(&self) -> Option<(f64, f64, f64)> {
        Some((self.min?, self.median?, self.max?))
    }
}

/// `true` when `path` names a gzip-compressed file.
pub fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("gz"))
}

/// Reads a suite file, decompressing `.gz` files.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be read,
/// [`ReportError::FileTooLarge`] if it exceeds [`max_file_size`], and
/// [`ReportError::Parse`] if the content is not a suite document.
pub fn read_suite(path: &Path) -> Result<SuiteDocument> {
    let max = max_file_size();
    let metadata = fs::metadata(path).map_err(|e| ReportError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(ReportError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }

    let raw = fs::read(path).map_err(|e| ReportError::io_error(path, e))?;
    let bytes = if is_gzip(path) {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice())
            .take(max + 1)
            .read_to_end(&mut decoded)
            .map_err(|e| ReportError::parse(path, e))?;
        if decoded.len() as u64 > max {
            return Err(ReportError::FileTooLarge {
                path: path.to_path_buf(),
                actual: decoded.len() as u64,
                max,
            });
        }
        decoded
    } else {
        raw
    };

    let doc: SuiteDocument =
        serde_json::from_slice(&bytes).map_err(|e| ReportError::parse(path, e))?;
    debug!(
        path = %path.display(),
        benchmarks = doc.benchmarks.len(),
        "read suite document"
    );
    Ok(doc)
}

/// Writes a suite file as pretty JSON, gzip-compressed for `.gz` paths.
///
/// Parent directories are created as needed.
pub fn write_suite(doc: &SuiteDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io_error(parent, e))?;
    }

    let json = serde_json::to_vec_pretty(doc).map_err(|e| ReportError::parse(path, e))?;
    let bytes = if is_gzip(path) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&json)
            .and_then(|_| encoder.finish())
            .map_err(|e| ReportError::io_error(path, e))?
    } else {
        json
    };

    fs::write(path, bytes).map_err(|e| ReportError::io_error(path, e))
}
