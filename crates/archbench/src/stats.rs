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

//! Order statistics over plain sample sequences.
//!
//! Used when a result file carries raw samples but no precomputed summary.

/// Summary of a non-empty sample sequence, in the samples' own unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest sample.
    pub min: f64,
    /// Middle sample, or the mean of the two middle samples for even counts.
    pub median: f64,
    /// Largest sample.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Number of samples.
    pub count: usize,
}

impl Summary {
    /// Computes the summary of `samples`.
    ///
    /// Returns `None` for an empty sequence. NaN samples are ordered with
    /// `f64::total_cmp` and therefore sort after every finite value.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            median: median_of_sorted(&sorted),
            max: sorted[sorted.len() - 1],
            mean: mean(&sorted),
            count: sorted.len(),
        })
    }
}

/// Median of an already sorted, non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Median of `samples`, `None` when empty.
pub fn median(samples: &[f64]) -> Option<f64> {
    Summary::from_samples(samples).map(|s| s.median)
}

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_samples() {
        assert_eq!(Summary::from_samples(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_odd_count() {
        let s = Summary::from_samples(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.count, 3);
    }

    #[test]
    fn test_even_count_averages_middle_pair() {
        let s = Summary::from_samples(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn test_single_sample() {
        let s = Summary::from_samples(&[0.25]).unwrap();
        assert_eq!((s.min, s.median, s.max, s.mean), (0.25, 0.25, 0.25, 0.25));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let a = Summary::from_samples(&[0.5, 0.1, 0.9, 0.3]).unwrap();
        let b = Summary::from_samples(&[0.9, 0.3, 0.1, 0.5]).unwrap();
        assert_eq!(a, b);
    }
}
