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

//! Environment description attached to collected result files.
//!
//! Every value is a single line so the file stays readable by pyperf, whose
//! metadata forbids embedded newlines.

use std::collections::BTreeMap;
use std::env;

/// Longest metadata value kept verbatim, in characters.
pub const MAX_VALUE_CHARS: usize = 4000;

/// Suffix appended to truncated values.
pub const TRUNCATED_SUFFIX: &str = "...(truncated)";

/// Thread-control variables recorded when set.
pub const THREAD_ENV_VARS: &[&str] = &[
    "OMP_NUM_THREADS",
    "OPENBLAS_NUM_THREADS",
    "MKL_NUM_THREADS",
    "VECLIB_MAXIMUM_THREADS",
    "NUMEXPR_NUM_THREADS",
    "RAYON_NUM_THREADS",
];

/// CPU features reported under `build.target_features` when compiled in.
pub const TRACKED_TARGET_FEATURES: &[&str] = &[
    "sse2", "sse4.2", "avx", "avx2", "fma", "avx512f", "neon", "sve",
];

/// Environment metadata keyed by dotted names such as `platform.machine`.
pub type EnvironmentMetadata = BTreeMap<String, String>;

/// Describes the current host.
///
/// Keys that cannot be determined (the processor model outside Linux, for
/// instance) hold an empty string rather than being left out, except thread
/// variables, which appear only when set.
pub fn collect_metadata() -> EnvironmentMetadata {
    let mut meta = EnvironmentMetadata::new();
    insert(&mut meta, "platform.machine", env::consts::ARCH);
    insert(&mut meta, "platform.os", env::consts::OS);
    insert(&mut meta, "platform.family", env::consts::FAMILY);
    insert(&mut meta, "platform.processor", &processor_name());
    insert(&mut meta, "platform.cpu_count", &num_cpus::get().to_string());
    insert(
        &mut meta,
        "platform.physical_cpu_count",
        &num_cpus::get_physical().to_string(),
    );
    insert(&mut meta, "archbench.version", env!("CARGO_PKG_VERSION"));
    meta.extend(build_metadata());

    for key in THREAD_ENV_VARS {
        if let Some(value) = env::var_os(key) {
            insert(&mut meta, key, &value.to_string_lossy());
        }
    }
    meta
}

/// Describes how this binary was built: toolchain, profile, enabled CPU
/// features and the locked versions of the benchmark crates.
pub fn build_metadata() -> EnvironmentMetadata {
    let mut meta = EnvironmentMetadata::new();
    insert(&mut meta, "rustc.version", option_env!("VERGEN_RUSTC_SEMVER").unwrap_or_default());
    insert(&mut meta, "rustc.channel", option_env!("VERGEN_RUSTC_CHANNEL").unwrap_or_default());
    insert(
        &mut meta,
        "rustc.llvm_version",
        option_env!("VERGEN_RUSTC_LLVM_VERSION").unwrap_or_default(),
    );
    insert(
        &mut meta,
        "build.target",
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or_default(),
    );
    insert(
        &mut meta,
        "build.opt_level",
        option_env!("VERGEN_CARGO_OPT_LEVEL").unwrap_or_default(),
    );
    insert(&mut meta, "build.profile", build_profile());
    insert(&mut meta, "build.rustflags", env!("ARCHBENCH_RUSTFLAGS"));
    insert(&mut meta, "build.target_features", &enabled_target_features().join(","));

    for (name, version) in parse_locked_versions(env!("ARCHBENCH_LOCKED_VERSIONS")) {
        insert(&mut meta, &format!("{}.version", name), &version);
    }
    meta
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

/// The entries of [`TRACKED_TARGET_FEATURES`] enabled at compile time.
pub fn enabled_target_features() -> Vec<&'static str> {
    let enabled = [
        cfg!(target_feature = "sse2"),
        cfg!(target_feature = "sse4.2"),
        cfg!(target_feature = "avx"),
        cfg!(target_feature = "avx2"),
        cfg!(target_feature = "fma"),
        cfg!(target_feature = "avx512f"),
        cfg!(target_feature = "neon"),
        cfg!(target_feature = "sve"),
    ];
    TRACKED_TARGET_FEATURES
        .iter()
        .zip(enabled)
        .filter_map(|(name, on)| on.then_some(*name))
        .collect()
}

/// Splits `name=version;...` into crate names and versions. A crate locked at
/// several versions gets them joined with `, `.
fn parse_locked_versions(encoded: &str) -> BTreeMap<String, String> {
    let mut versions: BTreeMap<String, String> = BTreeMap::new();
    for (name, version) in encoded
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(name, version)| !name.is_empty() && !version.is_empty())
    {
        versions
            .entry(name.to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(version);
            })
            .or_insert_with(|| version.to_string());
    }
    versions
}

fn insert(meta: &mut EnvironmentMetadata, key: &str, value: &str) {
    meta.insert(key.to_string(), single_line(value));
}

/// Collapses line breaks to spaces and truncates to [`MAX_VALUE_CHARS`].
pub fn single_line(value: &str) -> String {
    let flat: String = value
        .trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() > MAX_VALUE_CHARS {
        let mut cut: String = flat.chars().take(MAX_VALUE_CHARS).collect();
        cut.push_str(TRUNCATED_SUFFIX);
        cut
    } else {
        flat
    }
}

fn processor_name() -> String {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|info| cpuinfo_model(&info))
            .unwrap_or_default()
    }
    #[cfg(not(target_os = "linux"))]
    {
        String::new()
    }
}

/// Model name from `/proc/cpuinfo` text.
///
/// x86 kernels report `model name`; many arm64 kernels only report
/// `CPU implementer`/`CPU part`, and some report `Hardware` or `Processor`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn cpuinfo_model(info: &str) -> Option<String> {
    const KEYS: &[&str] = &["model name", "Hardware", "Processor", "cpu model"];
    KEYS.iter().find_map(|key| {
        info.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(k, _)| k.trim() == *key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_keys_present() {
        let meta = collect_metadata();
        for key in [
            "platform.machine",
            "platform.os",
            "platform.family",
            "platform.processor",
            "platform.cpu_count",
            "platform.physical_cpu_count",
            "archbench.version",
        ] {
            assert!(meta.contains_key(key), "missing {}", key);
        }
        assert_eq!(meta["platform.machine"], env::consts::ARCH);
        assert!(meta["platform.cpu_count"].parse::<usize>().unwrap() >= 1);
    }

    #[test]
    fn test_build_keys_present() {
        let meta = collect_metadata();
        for key in [
            "rustc.version",
            "rustc.channel",
            "build.target",
            "build.opt_level",
            "build.profile",
            "build.rustflags",
            "build.target_features",
        ] {
            assert!(meta.contains_key(key), "missing {}", key);
        }

        let version = &meta["rustc.version"];
        let parts: Vec<&str> = version.split('.').collect();
        assert!(parts.len() >= 3, "unexpected rustc version {}", version);
        assert!(parts[0].parse::<u32>().is_ok());

        let expected = if cfg!(debug_assertions) { "debug" } else { "release" };
        assert_eq!(meta["build.profile"], expected);
    }

    #[test]
    fn test_target_features_match_compiled_cfg() {
        let features = enabled_target_features();
        assert_eq!(features.contains(&"avx2"), cfg!(target_feature = "avx2"));
        assert_eq!(features.contains(&"neon"), cfg!(target_feature = "neon"));
        assert_eq!(features.contains(&"fma"), cfg!(target_feature = "fma"));
        assert_eq!(build_metadata()["build.target_features"], features.join(","));

        #[cfg(target_arch = "x86_64")]
        assert!(features.contains(&"sse2"));
    }

    #[test]
    fn test_parse_locked_versions() {
        let versions = parse_locked_versions("ndarray=0.15.6;rand=0.8.5;rand=0.9.0;broken;=1.0");
        assert_eq!(versions.len(), 2);
        assert_eq!(versions["ndarray"], "0.15.6");
        assert_eq!(versions["rand"], "0.8.5, 0.9.0");

        assert!(parse_locked_versions("").is_empty());
    }

    #[test]
    fn test_values_are_single_line() {
        for value in collect_metadata().values() {
            assert!(!value.contains('\n'));
        }
        assert_eq!(single_line("a\nb\r\nc"), "a b  c");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(MAX_VALUE_CHARS + 10);
        let cut = single_line(&long);
        assert!(cut.ends_with(TRUNCATED_SUFFIX));
        assert_eq!(cut.chars().count(), MAX_VALUE_CHARS + TRUNCATED_SUFFIX.len());

        let exact = "y".repeat(MAX_VALUE_CHARS);
        assert_eq!(single_line(&exact), exact);
    }

    #[test]
    fn test_cpuinfo_model() {
        let x86 = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Xeon(R)\n";
        assert_eq!(cpuinfo_model(x86).as_deref(), Some("Intel(R) Xeon(R)"));

        let arm = "processor\t: 0\nBogoMIPS\t: 50.00\nCPU part\t: 0xd0c\n";
        assert_eq!(cpuinfo_model(arm), None);

        let board = "processor\t: 0\nHardware\t: BCM2835\n";
        assert_eq!(cpuinfo_model(board).as_deref(), Some("BCM2835"));
    }
}
