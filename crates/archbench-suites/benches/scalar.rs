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

//! Scalar suite.
//!
//! Loop, allocation, lookup and call-overhead workloads. Criterion ids are
//! `scalar/<workload>[<count>]`.

use archbench_suites::scalar::{self, sizes, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group(scalar::SUITE);

    group.bench_function("int_loop_add[1e5]", |b| {
        b.iter(|| scalar::int_loop_add(black_box(sizes::INT_LOOP_ADD)))
    });

    group.bench_function("float_mul_add[1e5]", |b| {
        b.iter(|| scalar::float_mul_add(black_box(sizes::FLOAT_MUL_ADD)))
    });

    group.bench_function("vec_push[5e4]", |b| {
        b.iter(|| scalar::vec_push(black_box(sizes::VEC_PUSH)))
    });

    // Map is built once, outside the timed region
    let map = scalar::lookup_map(sizes::MAP_KEYS);
    group.bench_function("map_get_hit[1e5]", |b| {
        b.iter(|| scalar::map_get_hit(black_box(&map), sizes::MAP_GET_HIT))
    });

    group.bench_function("function_calls[2e5]", |b| {
        b.iter(|| scalar::function_calls(black_box(sizes::FUNCTION_CALLS)))
    });

    let record = Record::default();
    group.bench_function("field_get[2e5]", |b| {
        b.iter(|| scalar::field_get(black_box(&record), sizes::FIELD_GET))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar);
criterion_main!(benches);
