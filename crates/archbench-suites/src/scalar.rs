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

//! Scalar workloads: tight loops over integers, floats, a growing vector,
//! a hash map and plain function calls.
//!
//! Each workload keeps allocation out of the timed loop where it can and
//! returns a value derived from every iteration so nothing is optimized
//! away.

use std::collections::HashMap;

/// Criterion group name.
pub const SUITE: &str = "scalar";

/// Iteration counts, in the form they appear in benchmark names.
pub mod sizes {
    /// `int_loop_add[1e5]`
    pub const INT_LOOP_ADD: usize = 100_000;
    /// `float_mul_add[1e5]`
    pub const FLOAT_MUL_ADD: usize = 100_000;
    /// `vec_push[5e4]`
    pub const VEC_PUSH: usize = 50_000;
    /// `map_get_hit[1e5]`
    pub const MAP_GET_HIT: usize = 100_000;
    /// Keys in the lookup map.
    pub const MAP_KEYS: u64 = 10_000;
    /// `function_calls[2e5]`
    pub const FUNCTION_CALLS: usize = 200_000;
    /// `field_get[2e5]`
    pub const FIELD_GET: usize = 200_000;
}

/// Sums `0..n`.
pub fn int_loop_add(n: usize) -> u64 {
    let mut sum = 0u64;
    for i in 0..n as u64 {
        sum = sum.wrapping_add(i);
    }
    sum
}

/// Repeats `x = x * 0.9999 + 1e-6` starting from `1.0001`.
pub fn float_mul_add(n: usize) -> f64 {
    let mut x = 1.0001_f64;
    let y = 0.9999_f64;
    for _ in 0..n {
        x = x * y + 0.000_001;
    }
    x
}

/// Pushes `0..n` onto an empty vector and returns its length.
pub fn vec_push(n: usize) -> usize {
    let mut values = Vec::new();
    for i in 0..n {
        values.push(i);
    }
    values.len()
}

/// Map from `k` to `k + 1` for `k` in `0..keys`.
pub fn lookup_map(keys: u64) -> HashMap<u64, u64> {
    (0..keys).map(|k| (k, k + 1)).collect()
}

/// Sums `n` lookups that all hit, cycling through the map's keys.
pub fn map_get_hit(map: &HashMap<u64, u64>, n: usize) -> u64 {
    let keys = map.len().max(1) as u64;
    let mut sum = 0u64;
    for i in 0..n as u64 {
        sum = sum.wrapping_add(map.get(&(i % keys)).copied().unwrap_or(0));
    }
    sum
}

#[inline(never)]
fn tiny(x: u64) -> u64 {
    x + 1
}

/// Sums `tiny(i)` over `0..n` through a non-inlined call.
pub fn function_calls(n: usize) -> u64 {
    let f: fn(u64) -> u64 = tiny;
    let mut sum = 0u64;
    for i in 0..n as u64 {
        sum = sum.wrapping_add(f(i));
    }
    sum
}

/// A single-field record read by [`field_get`].
#[derive(Debug, Clone, Copy)]
pub struct Record {
    /// Value summed by the workload.
    pub x: u64,
}

impl Default for Record {
    fn default() -> Self {
        Self { x: 1 }
    }
}

/// Sums `record.x` `n` times.
pub fn field_get(record: &Record, n: usize) -> u64 {
    let mut sum = 0u64;
    for _ in 0..n {
        sum = sum.wrapping_add(std::hint::black_box(record).x);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_loop_add() {
        assert_eq!(int_loop_add(0), 0);
        assert_eq!(int_loop_add(10), 45);
        assert_eq!(int_loop_add(sizes::INT_LOOP_ADD), 4_999_950_000);
    }

    #[test]
    fn test_float_mul_add_converges() {
        let x = float_mul_add(sizes::FLOAT_MUL_ADD);
        // fixed point of x = 0.9999x + 1e-6 is 0.01
        assert!((x - 0.01).abs() < 1e-3, "got {}", x);
        assert_eq!(float_mul_add(0), 1.0001);
    }

    #[test]
    fn test_vec_push() {
        assert_eq!(vec_push(sizes::VEC_PUSH), 50_000);
    }

    #[test]
    fn test_map_get_hit() {
        let map = lookup_map(10);
        // keys cycle 0..10 twice, values are key + 1
        assert_eq!(map_get_hit(&map, 20), 2 * 55);
        assert!(map_get_hit(&lookup_map(sizes::MAP_KEYS), sizes::MAP_GET_HIT) > 0);
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(function_calls(4), 1 + 2 + 3 + 4);
    }

    #[test]
    fn test_field_get() {
        assert_eq!(field_get(&Record::default(), sizes::FIELD_GET), 200_000);
    }
}
