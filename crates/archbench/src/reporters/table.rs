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

//! Fixed-width comparison table.
//!
//! Layout:
//!
//! ```text
//!
//! Benchmark Comparison (median μs): arm64 vs x86_64
//! ============================================================
//! Benchmark Name            |     A |     B | arm64 faster by
//! ------------------------------------------------------------
//! scalar/int_loop_add[1e5]  | 2.000 | 4.000 |      2.00x
//! ============================================================
//! ```
//!
//! All values share the unit picked by [`TimeUnit::for_values`] from every
//! median on display. The last column is always phrased relative to A.

use crate::compare::{comparison_rows, ComparisonRow};
use crate::loader::BenchmarkResultSet;
use crate::units::TimeUnit;

/// Minimum width of the benchmark name column.
pub const MIN_NAME_WIDTH: usize = 25;

/// Width of the ratio column.
pub const RATIO_WIDTH: usize = 10;

/// Diagnostic printed when the two sets share no benchmarks.
pub const NO_COMMON_MESSAGE: &str =
    "ERROR: No common benchmark names found between the two files.";

/// Renders the comparison table, or `None` when no benchmark is shared.
pub fn render_table(
    a: &BenchmarkResultSet,
    b: &BenchmarkResultSet,
    a_label: &str,
    b_label: &str,
) -> Option<String> {
    let rows = comparison_rows(a, b);
    if rows.is_empty() {
        return None;
    }
    Some(format_table(&rows, a_label, b_label))
}

/// Picks the display unit for a set of rows from all of their medians.
pub fn table_unit(rows: &[ComparisonRow]) -> TimeUnit {
    let medians: Vec<f64> = rows
        .iter()
        .map(|r| r.a.median)
        .chain(rows.iter().map(|r| r.b.median))
        .collect();
    TimeUnit::for_values(&medians)
}

/// Text of the ratio column for one row.
///
/// `inf` when A's median is zero, `{ratio}x` when A is at least as fast as
/// B, otherwise `{a/b}x slower`.
pub fn ratio_cell(row: &ComparisonRow) -> String {
    if row.ratio == f64::INFINITY {
        "inf".to_string()
    } else if row.ratio >= 1.0 {
        format!("{:.2}x", row.ratio)
    } else {
        let inverse = row.inverse_ratio();
        if inverse.is_infinite() {
            "inf slower".to_string()
        } else {
            format!("{:.2}x slower", inverse)
        }
    }
}

/// Formats already compared rows.
pub fn format_table(rows: &[ComparisonRow], a_label: &str, b_label: &str) -> String {
    let unit = table_unit(rows);

    let a_values: Vec<String> = rows
        .iter()
        .map(|r| format!("{:.3}", unit.convert(r.a.median)))
        .collect();
    let b_values: Vec<String> = rows
        .iter()
        .map(|r| format!("{:.3}", unit.convert(r.b.median)))
        .collect();

    let value_width = a_values
        .iter()
        .chain(&b_values)
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0);
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count() + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let ratio_header = format!("{} faster by", a_label);
    let header = format!(
        "{:<nw$} | {:>vw$} | {:>vw$} | {:>rw$}",
        "Benchmark Name",
        "A",
        "B",
        ratio_header,
        nw = name_width,
        vw = value_width,
        rw = RATIO_WIDTH,
    );
    let rule_width = header.chars().count();

    let mut lines = Vec::with_capacity(rows.len() + 6);
    lines.push(String::new());
    lines.push(format!(
        "Benchmark Comparison (median {}): {} vs {}",
        unit, a_label, b_label
    ));
    lines.push("=".repeat(rule_width));
    lines.push(header);
    lines.push("-".repeat(rule_width));

    for ((row, a_value), b_value) in rows.iter().zip(&a_values).zip(&b_values) {
        lines.push(format!(
            "{:<nw$} | {:>vw$} | {:>vw$} | {:>rw$}",
            row.name,
            a_value,
            b_value,
            ratio_cell(row),
            nw = name_width,
            vw = value_width,
            rw = RATIO_WIDTH,
        ));
    }

    lines.push("=".repeat(rule_width));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
