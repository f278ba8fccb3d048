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

//! Chart rendering tests.
//!
//! Drawing uses the DejaVu Sans Mono font shipped under `tests/fixtures`, so
//! these run the same on machines without system fonts.

use archbench::config::PlotConfig;
use archbench::loader::{BenchmarkResultSet, Stat};
use archbench::reporters::render_plot;
use archbench::ReportError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/DejaVuSansMono.ttf"
);

fn sets() -> (BenchmarkResultSet, BenchmarkResultSet) {
    let a = BenchmarkResultSet::from_pairs(
        "arm64",
        [
            ("array/dot[2^22,f64]", Stat::uniform(0.004)),
            ("scalar/vec_push[5e4]", Stat::new(1e-4, 2e-4, 3e-4)),
        ],
    );
    let b = BenchmarkResultSet::from_pairs(
        "x86_64",
        [
            ("array/dot[2^22,f64]", Stat::uniform(0.003)),
            ("scalar/vec_push[5e4]", Stat::new(1e-4, 1e-4, 1e-4).with_mean(1.5e-4)),
            ("scalar/only_here", Stat::uniform(1.0)),
        ],
    );
    (a, b)
}

fn config_in(dir: &Path, file: &str) -> PlotConfig {
    PlotConfig::default()
        .with_out(dir.join(file))
        .with_font(FIXTURE_FONT)
}

/// Width and height from a PNG's IHDR chunk.
fn png_size(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

// ===== Rendering =====

#[test]
fn test_render_plot_writes_png() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested").join("compare.png");
    let config = PlotConfig::default().with_out(&out).with_font(FIXTURE_FONT);

    let (a, b) = sets();
    let written = render_plot(&a, &b, &config).unwrap();
    assert_eq!(written, out);

    let bytes = fs::read(&out).unwrap();
    assert_eq!(png_size(&bytes), config.figure_size_px(2));
}

#[test]
fn test_render_plot_requires_common_benchmarks() {
    let a = BenchmarkResultSet::from_pairs("a", [("x", Stat::uniform(1.0))]);
    let b = BenchmarkResultSet::from_pairs("b", [("y", Stat::uniform(1.0))]);

    let dir = TempDir::new().unwrap();
    let err = render_plot(&a, &b, &config_in(dir.path(), "never.png")).unwrap_err();

    assert!(err.is_empty_intersection());
    assert!(!dir.path().join("never.png").exists());
}

// ===== Fonts =====

#[test]
fn test_missing_font_after_successful_render_is_reported() {
    let dir = TempDir::new().unwrap();
    let (a, b) = sets();

    render_plot(&a, &b, &config_in(dir.path(), "first.png")).unwrap();

    let out = dir.path().join("second.png");
    let config = PlotConfig::default()
        .with_out(&out)
        .with_font(dir.path().join("no-such-font.ttf"));
    let err = render_plot(&a, &b, &config).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }), "got {err:?}");
    assert!(!out.exists());
}

#[test]
fn test_unparseable_font_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let junk = dir.path().join("junk.ttf");
    fs::write(&junk, b"definitely not a font").unwrap();

    let out = dir.path().join("x.png");
    let config = PlotConfig::default().with_out(&out).with_font(&junk);
    let (a, b) = sets();
    let err = render_plot(&a, &b, &config).unwrap_err();

    assert!(matches!(err, ReportError::Font(_)), "got {err:?}");
    assert!(!out.exists());
}

#[test]
fn test_switching_fonts_keeps_rendering() {
    let dir = TempDir::new().unwrap();
    let (a, b) = sets();

    let copy = dir.path().join("copy.ttf");
    fs::copy(FIXTURE_FONT, &copy).unwrap();

    render_plot(&a, &b, &config_in(dir.path(), "one.png")).unwrap();
    let config = PlotConfig::default()
        .with_out(dir.path().join("two.png"))
        .with_font(&copy);
    render_plot(&a, &b, &config).unwrap();

    assert!(dir.path().join("one.png").is_file());
    assert!(dir.path().join("two.png").is_file());
}
