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

//! Display time units for comparison tables.
//!
//! A table uses one unit for every value. The unit is picked from the median
//! of all medians being displayed, so a single outlier cannot flip the scale.

use std::fmt;

/// Time unit used to display seconds values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Nanoseconds (`ns`).
    Nanoseconds,
    /// Microseconds (`μs`).
    Microseconds,
    /// Milliseconds (`ms`).
    Milliseconds,
    /// Seconds (`s`).
    Seconds,
}

impl TimeUnit {
    /// Maps a single seconds value to a unit.
    ///
    /// Thresholds: `< 1e-6` ns, `< 1e-3` μs, `< 1.0` ms, otherwise s.
    pub fn for_seconds(seconds: f64) -> Self {
        if seconds < 1e-6 {
            TimeUnit::Nanoseconds
        } else if seconds < 1e-3 {
            TimeUnit::Microseconds
        } else if seconds < 1.0 {
            TimeUnit::Milliseconds
        } else {
            TimeUnit::Seconds
        }
    }

    /// Picks one unit for a whole set of seconds values.
    ///
    /// The values are sorted and the element at `len / 2` decides (the upper
    /// middle for even counts). An empty slice yields seconds.
    ///
    /// This is not the averaged median: for `[1e-7, 1.5e-6]` the upper middle
    /// picks microseconds where the mean of the two middle values (8e-7)
    /// would pick nanoseconds.
    pub fn for_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return TimeUnit::Seconds;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::for_seconds(sorted[sorted.len() / 2])
    }

    /// Multiplier converting seconds into this unit.
    pub fn scale(&self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1e9,
            TimeUnit::Microseconds => 1e6,
            TimeUnit::Milliseconds => 1e3,
            TimeUnit::Seconds => 1.0,
        }
    }

    /// Converts a seconds value into this unit.
    pub fn convert(&self, seconds: f64) -> f64 {
        seconds * self.scale()
    }

    /// Unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "μs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Formats seconds with a per-value unit, e.g. `2.000 μs`.
pub fn format_time(seconds: f64) -> String {
    let unit = TimeUnit::for_seconds(seconds);
    format!("{:.3} {}", unit.convert(seconds), unit)
}
