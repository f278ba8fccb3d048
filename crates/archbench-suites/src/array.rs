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

//! Numerical array workloads on `ndarray`.
//!
//! Inputs are drawn uniformly from `[-1, 1)` with a seeded [`StdRng`] and
//! built once, outside the timed region. Kernels that produce an array
//! write into a preallocated output. The real FFT plans once and reuses its
//! buffers, so only the transform itself is timed.

use ndarray::linalg::general_mat_mul;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Criterion group name.
pub const SUITE: &str = "array";

/// Input sizes, in the form they appear in benchmark names.
pub mod sizes {
    /// `dot[2^22,f64]`
    pub const DOT: usize = 1 << 22;
    /// `matmul[512x512,f32]`
    pub const MATMUL: usize = 512;
    /// `exp[2^20,f32]`
    pub const EXP: usize = 1 << 20;
    /// `sum[2^23,f64]`
    pub const SUM: usize = 1 << 23;
    /// `rfft[2^17,f64]`
    pub const RFFT: usize = 1 << 17;
}

/// Deterministic generator for array inputs.
pub fn input_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `len` values uniform in `[-1, 1)`.
pub fn random_f64(rng: &mut StdRng, len: usize) -> Array1<f64> {
    Array1::from_shape_fn(len, |_| rng.gen_range(-1.0..1.0))
}

/// `len` values uniform in `[-1, 1)`.
pub fn random_f32(rng: &mut StdRng, len: usize) -> Array1<f32> {
    Array1::from_shape_fn(len, |_| rng.gen_range(-1.0..1.0))
}

/// `n x n` values uniform in `[-1, 1)`.
pub fn random_matrix_f32(rng: &mut StdRng, n: usize) -> Array2<f32> {
    Array2::from_shape_fn((n, n), |_| rng.gen_range(-1.0..1.0))
}

/// Inner product of two vectors.
pub fn dot(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.dot(b)
}

/// `out = a * b`; returns `out[[0, 0]]`.
pub fn matmul(a: &Array2<f32>, b: &Array2<f32>, out: &mut Array2<f32>) -> f32 {
    general_mat_mul(1.0, a, b, 0.0, out);
    out.iter().next().copied().unwrap_or_default()
}

/// Elementwise `out = exp(a)`; returns `out[0]`.
pub fn exp(a: &Array1<f32>, out: &mut Array1<f32>) -> f32 {
    out.zip_mut_with(a, |o, x| *o = x.exp());
    out.iter().next().copied().unwrap_or_default()
}

/// Sum of all elements.
pub fn sum(a: &Array1<f64>) -> f64 {
    a.sum()
}

/// Forward FFT of real input, keeping the `n / 2 + 1` non-redundant bins.
pub struct RealFft {
    fft: Arc<dyn Fft<f64>>,
    buffer: Vec<Complex<f64>>,
    scratch: Vec<Complex<f64>>,
}

impl RealFft {
    /// Plans a transform of length `n`.
    pub fn new(n: usize) -> Self {
        let fft = FftPlanner::<f64>::new().plan_fft_forward(n);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
        Self {
            fft,
            buffer: vec![Complex::new(0.0, 0.0); n],
            scratch,
        }
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True for a zero-length plan.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Transforms `input`, which must hold [`RealFft::len`] values, and
    /// returns the spectrum.
    pub fn process(&mut self, input: &Array1<f64>) -> &[Complex<f64>] {
        assert_eq!(input.len(), self.buffer.len(), "input length differs from plan");
        for (slot, x) in self.buffer.iter_mut().zip(input.iter()) {
            *slot = Complex::new(*x, 0.0);
        }
        self.fft.process_with_scratch(&mut self.buffer, &mut self.scratch);
        let bins = if self.buffer.is_empty() { 0 } else { self.buffer.len() / 2 + 1 };
        &self.buffer[..bins]
    }
}
