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

//! CSV export of a comparison.
//!
//! Times are seconds in scientific notation with nine fractional digits, the
//! ratio with six. Exponents are signed and at least two digits wide
//! (`2.000000000e-06`) so the output matches what spreadsheet tools and the
//! pyperf ecosystem produce. An infinite ratio is written as `inf`.

use crate::compare::{comparison_rows, ComparisonRow};
use crate::error::{ReportError, Result};
use crate::loader::BenchmarkResultSet;

/// Fractional digits for time columns.
pub const TIME_PRECISION: usize = 9;

/// Fractional digits for the ratio column.
pub const RATIO_PRECISION: usize = 6;

/// Formats `value` in scientific notation with a signed two-digit exponent.
///
/// Non-finite values become `inf`, `-inf` or `nan`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Header row for the given labels.
pub fn csv_header(a_label: &str, b_label: &str) -> Vec<String> {
    let mut header = vec!["Benchmark Name".to_string()];
    for label in [a_label, b_label] {
        for stat in ["min", "median", "max"] {
            header.push(format!("{}_{} (s)", label, stat));
        }
    }
    header.push("B/A_ratio".to_string());
    header
}

fn csv_record(row: &ComparisonRow) -> Vec<String> {
    vec![
        row.name.clone(),
        format_scientific(row.a.min, TIME_PRECISION),
        format_scientific(row.a.median, TIME_PRECISION),
        format_scientific(row.a.max, TIME_PRECISION),
        format_scientific(row.b.min, TIME_PRECISION),
        format_scientific(row.b.median, TIME_PRECISION),
        format_scientific(row.b.max, TIME_PRECISION),
        format_scientific(row.ratio, RATIO_PRECISION),
    ]
}

/// Writes already compared rows as CSV text.
pub fn format_csv(rows: &[ComparisonRow], a_label: &str, b_label: &str) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(csv_header(a_label, b_label))?;
    for row in rows {
        writer.write_record(csv_record(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
}

/// Renders the comparison as CSV, or `None` when no benchmark is shared.
pub fn render_csv(
    a: &BenchmarkResultSet,
    b: &BenchmarkResultSet,
    a_label: &str,
    b_label: &str,
) -> Result<Option<String>> {
    let rows = comparison_rows(a, b);
    if rows.is_empty() {
        return Ok(None);
    }
    format_csv(&rows, a_label, b_label).map(Some)
}
