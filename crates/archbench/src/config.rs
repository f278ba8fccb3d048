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

//! Configuration for loading, plotting and collecting results.
//!
//! Configuration is plain structs with `Default` values and `with_*`
//! builders. A few limits can be overridden from the environment:
//!
//! - `ARCHBENCH_MAX_FILE_SIZE`: largest result file accepted, in bytes
//! - `ARCHBENCH_FONT`: TrueType font used for chart text

use std::path::PathBuf;

/// Default maximum result file size (1 GiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "ARCHBENCH_MAX_FILE_SIZE";

/// Environment variable naming a TrueType font for chart text.
pub const FONT_ENV: &str = "ARCHBENCH_FONT";

/// Default plot output path.
pub const DEFAULT_PLOT_PATH: &str = "results/compare.png";

/// Default plot title.
pub const DEFAULT_PLOT_TITLE: &str = "arm64 vs x86_64 (lower is better)";

/// Criterion baseline read by default.
pub const DEFAULT_BASELINE: &str = "new";

/// Maximum accepted input size in bytes.
///
/// Reads [`MAX_FILE_SIZE_ENV`], falling back to [`DEFAULT_MAX_FILE_SIZE`]
/// when unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Bar chart settings.
///
/// # Example
///
/// ```no_run
/// use archbench::config::PlotConfig;
///
/// let config = PlotConfig::default()
///     .with_out("results/arm64_vs_x86.png")
///     .with_title("Graviton3 vs Sapphire Rapids");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Output PNG path.
    pub out: PathBuf,
    /// Chart title.
    pub title: String,
    /// Raster resolution in dots per inch.
    pub dpi: u32,
    /// Chart height in inches.
    pub height_in: f64,
    /// Minimum chart width in inches.
    pub min_width_in: f64,
    /// Width per benchmark in inches.
    pub width_per_benchmark_in: f64,
    /// Fraction of one category slot taken by each bar.
    pub bar_width: f64,
    /// Explicit TrueType font; `None` searches the environment and system.
    pub font: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_PLOT_PATH),
            title: DEFAULT_PLOT_TITLE.to_string(),
            dpi: 160,
            height_in: 5.0,
            min_width_in: 10.0,
            width_per_benchmark_in: 0.9,
            bar_width: 0.42,
            font: None,
        }
    }
}

impl PlotConfig {
    /// Sets the output path.
    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = out.into();
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets an explicit font file.
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the raster resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Figure size in inches for `benchmarks` categories.
    pub fn figure_size_in(&self, benchmarks: usize) -> (f64, f64) {
        let width = (benchmarks as f64 * self.width_per_benchmark_in).max(self.min_width_in);
        (width, self.height_in)
    }

    /// Figure size in pixels for `benchmarks` categories.
    pub fn figure_size_px(&self, benchmarks: usize) -> (u32, u32) {
        let (w, h) = self.figure_size_in(benchmarks);
        let dpi = f64::from(self.dpi);
        ((w * dpi).round() as u32, (h * dpi).round() as u32)
    }
}

/// Settings for packaging a Criterion tree into one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectConfig {
    /// Criterion baseline directory name (`new`, `base`, or a saved name).
    pub baseline: String,
    /// Label stored in the suite metadata.
    pub label: Option<String>,
    /// Whether to embed environment metadata.
    pub include_metadata: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            label: None,
            include_metadata: true,
        }
    }
}

impl CollectConfig {
    /// Sets the Criterion baseline to read.
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    /// Sets the label stored in the suite metadata.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Disables environment metadata.
    pub fn without_metadata(mut self) -> Self {
        self.include_metadata = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.out, PathBuf::from("results/compare.png"));
        assert_eq!(config.title, "arm64 vs x86_64 (lower is better)");
        assert_eq!(config.dpi, 160);
        assert_eq!(config.bar_width, 0.42);
        assert!(config.font.is_none());
    }

    #[test]
    fn test_figure_size_has_minimum_width() {
        let config = PlotConfig::default();
        assert_eq!(config.figure_size_in(1), (10.0, 5.0));
        assert_eq!(config.figure_size_px(1), (1600, 800));
    }

    #[test]
    fn test_figure_size_scales_with_benchmarks() {
        let config = PlotConfig::default();
        let (w, h) = config.figure_size_in(20);
        assert!((w - 18.0).abs() < 1e-9);
        assert_eq!(h, 5.0);
        assert_eq!(config.figure_size_px(20), (2880, 800));
    }

    #[test]
    fn test_plot_builders() {
        let config = PlotConfig::default()
            .with_out("out/x.png")
            .with_title("T")
            .with_font("/fonts/a.ttf")
            .with_dpi(80);
        assert_eq!(config.out, PathBuf::from("out/x.png"));
        assert_eq!(config.title, "T");
        assert_eq!(config.font, Some(PathBuf::from("/fonts/a.ttf")));
        assert_eq!(config.figure_size_px(1), (800, 400));
    }

    #[test]
    fn test_collect_builders() {
        let config = CollectConfig::default();
        assert_eq!(config.baseline, "new");
        assert!(config.include_metadata);

        let config = config.with_baseline("main").with_label("arm64").without_metadata();
        assert_eq!(config.baseline, "main");
        assert_eq!(config.label.as_deref(), Some("arm64"));
        assert!(!config.include_metadata);
    }
}
