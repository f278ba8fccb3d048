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

//! Comparison of two result sets.
//!
//! Only benchmarks present in both sets are compared. Ratios are always
//! expressed as B over A, so a ratio above one means A is faster.

use crate::error::{ReportError, Result};
use crate::loader::{BenchmarkResultSet, Stat};
use std::collections::BTreeSet;

/// One benchmark present in both result sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Benchmark name.
    pub name: String,
    /// Statistics from result set A.
    pub a: Stat,
    /// Statistics from result set B.
    pub b: Stat,
    /// `b.median / a.median`, infinite when A's median is zero.
    pub ratio: f64,
}

impl ComparisonRow {
    /// Builds a row and computes its median ratio.
    pub fn new(name: impl Into<String>, a: Stat, b: Stat) -> Self {
        Self {
            name: name.into(),
            ratio: ratio(&a, &b),
            a,
            b,
        }
    }

    /// Ratio of the representative values (mean, else median), B over A.
    pub fn mean_ratio(&self) -> f64 {
        divide_or_inf(self.b.representative(), self.a.representative())
    }

    /// How many times slower A is than B; meaningful when `ratio < 1`.
    pub fn inverse_ratio(&self) -> f64 {
        divide_or_inf(self.a.median, self.b.median)
    }
}

fn divide_or_inf(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::INFINITY
    } else {
        numerator / denominator
    }
}

/// Median ratio B/A; positive infinity when A's median is exactly zero.
pub fn ratio(a: &Stat, b: &Stat) -> f64 {
    divide_or_inf(b.median, a.median)
}

/// Benchmark names present in both sets, sorted lexicographically.
pub fn common_names(a: &BenchmarkResultSet, b: &BenchmarkResultSet) -> Vec<String> {
    let a_names: BTreeSet<&str> = a.names().collect();
    let b_names: BTreeSet<&str> = b.names().collect();
    a_names
        .intersection(&b_names)
        .map(|name| name.to_string())
        .collect()
}

/// Pairs up the common benchmarks of `a` and `b` in name order.
///
/// # Errors
///
/// Returns [`ReportError::NoCommonBenchmarks`] when the sets share no names.
pub fn compare(a: &BenchmarkResultSet, b: &BenchmarkResultSet) -> Result<Vec<ComparisonRow>> {
    let rows = comparison_rows(a, b);
    if rows.is_empty() {
        return Err(ReportError::NoCommonBenchmarks {
            a: a.label().to_string(),
            b: b.label().to_string(),
        });
    }
    Ok(rows)
}

/// Like [`compare`] but returns an empty vector instead of an error.
pub fn comparison_rows(a: &BenchmarkResultSet, b: &BenchmarkResultSet) -> Vec<ComparisonRow> {
    common_names(a, b)
        .into_iter()
        .filter_map(|name| {
            let sa = *a.get(&name)?;
            let sb = *b.get(&name)?;
            Some(ComparisonRow::new(name, sa, sb))
        })
        .collect()
}
