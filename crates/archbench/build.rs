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

//! Build script for archbench
//!
//! Records the toolchain and the locked versions of the benchmark stack so
//! collected result files can say what produced them.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use vergen::EmitBuilder;

/// Crates whose locked versions are reported in the environment metadata.
const TRACKED_CRATES: &[&str] = &["ndarray", "rustfft", "gbdt", "rand", "criterion"];

fn main() -> Result<(), Box<dyn Error>> {
    EmitBuilder::builder()
        .rustc_semver()
        .rustc_channel()
        .rustc_llvm_version()
        .cargo_target_triple()
        .cargo_opt_level()
        .emit()?;

    let rustflags = env::var("CARGO_ENCODED_RUSTFLAGS")
        .unwrap_or_default()
        .split('\x1f')
        .filter(|flag| !flag.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    println!("cargo:rustc-env=ARCHBENCH_RUSTFLAGS={}", rustflags);
    println!("cargo:rerun-if-env-changed=RUSTFLAGS");
    println!("cargo:rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");

    // The workspace lockfile; absent when built as a dependency.
    let lock = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join("../../Cargo.lock");
    let versions = match fs::read_to_string(&lock) {
        Ok(text) => {
            println!("cargo:rerun-if-changed={}", lock.display());
            locked_versions(&text, TRACKED_CRATES)
        }
        Err(_) => String::new(),
    };
    println!("cargo:rustc-env=ARCHBENCH_LOCKED_VERSIONS={}", versions);

    Ok(())
}

/// `name=version` pairs joined by `;` for every tracked package in `lock`.
fn locked_versions(lock: &str, names: &[&str]) -> String {
    let mut found = Vec::new();
    let mut current: Option<&str> = None;
    for line in lock.lines().map(str::trim) {
        if line == "[[package]]" {
            current = None;
        } else if let Some(name) = line.strip_prefix("name = ") {
            current = Some(name.trim_matches('"'));
        } else if let Some(version) = line.strip_prefix("version = ") {
            if let Some(name) = current.filter(|n| names.contains(n)) {
                found.push(format!("{}={}", name, version.trim_matches('"')));
            }
        }
    }
    found.join(";")
}
