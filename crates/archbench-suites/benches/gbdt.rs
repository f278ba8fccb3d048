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

//! Gradient-boosted tree suite.
//!
//! Training clones the prepared samples outside the timed region; the
//! prediction bench scores a held-out set with a model trained up front.

use archbench_suites::array::input_rng;
use archbench_suites::boosting::{self, sizes};
use archbench_suites::INPUT_SEED;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn bench_gbdt(c: &mut Criterion) {
    let cfg = boosting::training_config(sizes::FEATURES, sizes::ROUNDS);
    let train_set =
        boosting::make_classification(&mut input_rng(INPUT_SEED), sizes::SAMPLES, sizes::FEATURES);
    let training_data = train_set.training_data();

    let model = boosting::train(&cfg, &mut training_data.clone());
    let test_set =
        boosting::make_classification(&mut input_rng(INPUT_SEED + 1), sizes::SAMPLES, sizes::FEATURES);
    let test_data = test_set.test_data();

    let mut group = c.benchmark_group(boosting::SUITE);
    group.sample_size(10);

    group.bench_function("train[10000x32,rounds=50]", |b| {
        b.iter_batched(
            || training_data.clone(),
            |mut data| boosting::train(&cfg, &mut data),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("predict[10000x32,rounds=50]", |b| {
        b.iter(|| boosting::predict(&model, black_box(&test_data)))
    });

    group.finish();
}

criterion_group!(benches, bench_gbdt);
criterion_main!(benches);
