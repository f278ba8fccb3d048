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

//! Grouped bar chart of two result sets.
//!
//! One category per common benchmark (sorted by name), two bars per
//! category. Bars show each benchmark's mean, or its median when the mean is
//! unknown. The chart is rendered with `plotters` into a PNG whose pixel size
//! follows [`PlotConfig::figure_size_px`].
//!
//! Chart text needs a TrueType font. The font is taken from
//! [`PlotConfig::font`], then `ARCHBENCH_FONT`, then a list of common system
//! locations, and is registered once per process.

use crate::compare::{compare, ComparisonRow};
use crate::config::{PlotConfig, FONT_ENV};
use crate::error::{ReportError, Result};
use crate::loader::BenchmarkResultSet;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Y axis description.
pub const Y_AXIS_LABEL: &str = "Mean time (seconds) - lower is better";

/// Font family name chart text is registered under.
const FONT_FAMILY: &str = "sans-serif";

/// Well-known TrueType font locations, tried in order.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const A_COLOR: RGBColor = RGBColor(31, 119, 180);
const B_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Path of the font currently registered under [`FONT_FAMILY`].
static REGISTERED_FONT: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Values plotted for the common benchmarks of two result sets.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// Label of result set A.
    pub a_label: String,
    /// Label of result set B.
    pub b_label: String,
    /// Benchmark names in category order.
    pub names: Vec<String>,
    /// A's representative value per benchmark, seconds.
    pub a_values: Vec<f64>,
    /// B's representative value per benchmark, seconds.
    pub b_values: Vec<f64>,
}

impl PlotData {
    /// Builds plot data from compared rows.
    pub fn from_rows(a_label: &str, b_label: &str, rows: &[ComparisonRow]) -> Self {
        Self {
            a_label: a_label.to_string(),
            b_label: b_label.to_string(),
            names: rows.iter().map(|r| r.name.clone()).collect(),
            a_values: rows.iter().map(|r| r.a.representative()).collect(),
            b_values: rows.iter().map(|r| r.b.representative()).collect(),
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Upper bound of the y axis: 10% headroom over the largest bar.
    pub fn y_max(&self) -> f64 {
        let max = self
            .a_values
            .iter()
            .chain(&self.b_values)
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    /// Text summary: a title line then one line per benchmark.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len() + 1);
        lines.push(format!("{} vs {}", self.a_label, self.b_label));
        for ((name, a), b) in self.names.iter().zip(&self.a_values).zip(&self.b_values) {
            let speedup = if *a == 0.0 { f64::INFINITY } else { b / a };
            lines.push(format!(
                "- {}: {:.6}s vs {:.6}s  (b/a={:.3}x)",
                name, a, b, speedup
            ));
        }
        lines
    }
}

/// Horizontal extent `[left, right]` of each bar in category `index`.
///
/// A sits left of the category centre and B right of it, each `bar_width`
/// wide.
pub fn bar_span(index: usize, bar_width: f64) -> ((f64, f64), (f64, f64)) {
    let center = index as f64;
    ((center - bar_width, center), (center, center + bar_width))
}

/// Locates a TrueType font: explicit path, then `ARCHBENCH_FONT`, then the
/// first existing entry of [`SYSTEM_FONT_PATHS`].
pub fn find_font(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(FONT_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    SYSTEM_FONT_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Resolves the font for `config` and registers it unless it is already the
/// registered one. A different path replaces the previous registration.
fn ensure_font(config: &PlotConfig) -> Result<PathBuf> {
    let path = find_font(config.font.as_deref()).ok_or_else(|| {
        ReportError::Font(format!(
            "no TrueType font found; pass --font or set {}",
            FONT_ENV
        ))
    })?;

    let mut registered = REGISTERED_FONT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if registered.as_deref() == Some(path.as_path()) {
        return Ok(path);
    }

    let bytes = fs::read(&path).map_err(|e| ReportError::io_error(&path, e))?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| {
        ReportError::Font(format!("'{}' is not a usable TrueType font", path.display()))
    })?;
    debug!(font = %path.display(), "registered chart font");
    *registered = Some(path.clone());
    Ok(path)
}

fn plot_err(err: impl Display) -> ReportError {
    ReportError::Plot(err.to_string())
}

/// Points (1/72 inch) to pixels at the configured resolution.
fn points_to_px(points: f64, dpi: u32) -> u32 {
    (points * f64::from(dpi) / 72.0).round() as u32
}

fn x_label_area_px(data: &PlotData, label_px: u32, height: u32) -> u32 {
    let longest = data
        .names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let needed = (longest * f64::from(label_px) * 0.6) as u32 + label_px;
    needed.clamp(label_px * 2, height / 2)
}

/// Estimated rendered width of `text` at `label_px`.
fn text_width_px(text: &str, label_px: u32) -> u32 {
    (text.chars().count() as f64 * f64::from(label_px) * 0.6).ceil() as u32
}

/// Width reserved right of the plotting area for the legend.
fn legend_width_px(data: &PlotData, label_px: u32) -> u32 {
    let longest = text_width_px(&data.a_label, label_px)
        .max(text_width_px(&data.b_label, label_px));
    2 * label_px + longest + label_px / 2
}

/// Swatch corners for legend `row`, placed right of the plotting area whose
/// top-right corner is `(plot_right, plot_top)`.
fn legend_swatch(
    plot_right: i32,
    plot_top: i32,
    row: usize,
    label_px: u32,
) -> ((i32, i32), (i32, i32)) {
    let px = label_px as i32;
    let x0 = plot_right + px / 2;
    let centre = plot_top + px + row as i32 * px * 3 / 2;
    let half = px / 3;
    ((x0, centre - half), (x0 + px, centre + half))
}

fn format_seconds_tick(value: f64, y_max: f64) -> String {
    if y_max < 1e-2 {
        format!("{:.1e}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Draws the bar chart to `config.out`.
///
/// # Errors
///
/// Returns [`ReportError::Font`] when no font can be registered,
/// [`ReportError::Io`] when the output directory cannot be created and
/// [`ReportError::Plot`] when rendering or encoding fails.
pub fn draw_chart(data: &PlotData, config: &PlotConfig) -> Result<()> {
    if data.is_empty() {
        return Err(ReportError::Plot("nothing to plot".to_string()));
    }
    ensure_font(config)?;

    if let Some(parent) = config.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io_error(parent, e))?;
    }

    let (width, height) = config.figure_size_px(data.len());
    let title_px = points_to_px(12.0, config.dpi);
    let label_px = points_to_px(9.0, config.dpi);
    let y_max = data.y_max();
    let categories = data.len() as f64;

    let root = BitMapBackend::new(&config.out, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let margin = points_to_px(6.0, config.dpi);
    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, (FONT_FAMILY, title_px))
        .margin(margin)
        .margin_right(margin + legend_width_px(data, label_px))
        .x_label_area_size(x_label_area_px(data, label_px, height))
        .y_label_area_size(points_to_px(60.0, config.dpi))
        .build_cartesian_2d(-0.5..categories - 0.5, 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(WHITE)
        .x_labels(0)
        .y_label_formatter(&|y| format_seconds_tick(*y, y_max))
        .y_label_style((FONT_FAMILY, label_px))
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style((FONT_FAMILY, label_px))
        .draw()
        .map_err(plot_err)?;

    // Category names sit under each category centre, rotated to read downwards.
    let name_style = TextStyle::from((FONT_FAMILY, f64::from(label_px)).into_font())
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let tick_gap = points_to_px(3.0, config.dpi) as i32;
    for (index, name) in data.names.iter().enumerate() {
        let (x, y) = chart.backend_coord(&(index as f64, 0.0));
        root.draw(&Text::new(name.clone(), (x, y + tick_gap), name_style.clone()))
            .map_err(plot_err)?;
    }

    let bar_width = config.bar_width;
    chart
        .draw_series(data.a_values.iter().enumerate().map(|(i, v)| {
            let ((left, right), _) = bar_span(i, bar_width);
            Rectangle::new([(left, 0.0), (right, *v)], A_COLOR.filled())
        }))
        .map_err(plot_err)?;

    chart
        .draw_series(data.b_values.iter().enumerate().map(|(i, v)| {
            let (_, (left, right)) = bar_span(i, bar_width);
            Rectangle::new([(left, 0.0), (right, *v)], B_COLOR.filled())
        }))
        .map_err(plot_err)?;

    // Legend lives in the reserved right margin so it never covers a bar.
    let (plot_right, plot_top) = chart.backend_coord(&(categories - 0.5, y_max));
    let legend_style = TextStyle::from((FONT_FAMILY, f64::from(label_px)).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (row, (label, color)) in [(&data.a_label, A_COLOR), (&data.b_label, B_COLOR)]
        .into_iter()
        .enumerate()
    {
        let (top_left, bottom_right) = legend_swatch(plot_right, plot_top, row, label_px);
        root.draw(&Rectangle::new([top_left, bottom_right], color.filled()))
            .map_err(plot_err)?;
        let text_at = (bottom_right.0 + label_px as i32 / 2, (top_left.1 + bottom_right.1) / 2);
        root.draw(&Text::new(label.clone(), text_at, legend_style.clone()))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Compares `a` and `b`, prints the text summary and writes the chart.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`ReportError::NoCommonBenchmarks`] when the sets share nothing,
/// otherwise the errors of [`draw_chart`].
pub fn render_plot(
    a: &BenchmarkResultSet,
    b: &BenchmarkResultSet,
    config: &PlotConfig,
) -> Result<PathBuf> {
    let rows = compare(a, b)?;
    let data = PlotData::from_rows(a.label(), b.label(), &rows);

    for line in data.summary_lines() {
        println!("{}", line);
    }

    draw_chart(&data, config)?;
    info!(path = %config.out.display(), benchmarks = data.len(), "wrote plot");
    println!("\nWrote plot to: {}", config.out.display());
    Ok(config.out.clone())
}
