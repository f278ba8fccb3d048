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

//! Env command - print the host description stored by `collect`

use archbench::metadata::collect_metadata;

/// Print environment metadata as aligned `key  value` lines, or as JSON.
///
/// # Errors
///
/// Returns `Err` only if JSON serialization fails.
pub fn env(json: bool) -> Result<(), String> {
    let meta = collect_metadata();

    if json {
        let text = serde_json::to_string_pretty(&meta)
            .map_err(|e| format!("JSON serialization error: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    let width = meta.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in &meta {
        println!("{:<width$}  {}", key, value, width = width);
    }
    Ok(())
}
