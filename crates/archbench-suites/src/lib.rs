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

//! Archbench Benchmark Suites
//!
//! Workloads timed by the Criterion benches in `benches/`. Each bench
//! registers its workloads under a group named after its suite, so a
//! workload's Criterion id is `<suite>/<name>`, e.g.
//! `scalar/int_loop_add[1e5]`.
//!
//! ## Usage
//!
//! Run all suites and package the results:
//! ```bash
//! cargo bench --package archbench-suites
//! archbench collect target/criterion --label "$(uname -m)"
//! ```
//!
//! Run one suite:
//! ```bash
//! cargo bench --package archbench-suites --bench array
//! ```

pub mod array;
pub mod boosting;
pub mod scalar;

/// Seed for every generated input, so both machines time identical data.
pub const INPUT_SEED: u64 = 0;
