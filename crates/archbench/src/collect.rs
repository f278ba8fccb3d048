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

//! Packaging of a Criterion output tree into one portable result file.
//!
//! The collected suite carries the host description from
//! [`crate::metadata`], a label, a timestamp and a precomputed summary per
//! benchmark, so it can be compared on another machine without the tree.

use crate::config::CollectConfig;
use crate::error::Result;
use crate::format::criterion::read_criterion_dir;
use crate::format::{SuiteDocument, SummaryEntry};
use crate::metadata::collect_metadata;
use crate::stats::Summary;
use chrono::{SecondsFormat, Utc};
use std::path::Path;
use tracing::{debug, info};

/// Metadata key holding the suite label.
pub const LABEL_KEY: &str = "label";

/// Metadata key holding the collection time.
pub const TIMESTAMP_KEY: &str = "collected_at";

/// Reads the Criterion tree at `root` and enriches it for storage.
///
/// Each benchmark with samples gets a full summary: order statistics from
/// its samples and the mean Criterion estimated, or the sample mean when
/// the estimate is missing.
///
/// # Errors
///
/// Propagates the errors of [`read_criterion_dir`].
pub fn collect(root: &Path, config: &CollectConfig) -> Result<SuiteDocument> {
    let mut doc = read_criterion_dir(root, &config.baseline)?;

    for entry in &mut doc.benchmarks {
        let Some(summary) = Summary::from_samples(&entry.pooled_values()) else {
            continue;
        };
        let mean = entry.summary.and_then(|s| s.mean).unwrap_or(summary.mean);
        entry.summary = Some(SummaryEntry {
            min: Some(summary.min),
            median: Some(summary.median),
            max: Some(summary.max),
            mean: Some(mean),
        });
    }

    if config.include_metadata {
        for (key, value) in collect_metadata() {
            doc.set_metadata(key, value);
        }
    }
    if let Some(label) = &config.label {
        doc.set_metadata(LABEL_KEY, label.as_str());
    }
    doc.set_metadata(
        TIMESTAMP_KEY,
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    debug!(
        root = %root.display(),
        baseline = %config.baseline,
        "collected Criterion tree"
    );
    info!(benchmarks = doc.benchmarks.len(), "collected benchmarks");
    Ok(doc)
}
