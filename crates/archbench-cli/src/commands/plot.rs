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

//! Plot command - grouped bar chart of two result files

use super::load_results;
use archbench::config::PlotConfig;
use archbench::reporters::render_plot;

/// Render a bar chart comparing two result files.
///
/// Prints a per-benchmark summary followed by the path written.
///
/// # Errors
///
/// Returns `Err` if an input cannot be loaded, the inputs share no
/// benchmark, no font is available, or the PNG cannot be written.
pub fn plot(
    a: &str,
    b: &str,
    out: &str,
    title: &str,
    font: Option<&str>,
) -> Result<(), String> {
    let a = load_results(a, None)?;
    let b = load_results(b, None)?;

    let mut config = PlotConfig::default().with_out(out).with_title(title);
    if let Some(font) = font {
        config = config.with_font(font);
    }

    render_plot(&a, &b, &config)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
