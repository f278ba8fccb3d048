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

//! Presentation layers over compared result sets.
//!
//! Every reporter consumes the rows produced by [`crate::compare`]; none of
//! them reorders or filters benchmarks on its own.

pub mod csv;
pub mod plot;
pub mod table;

pub use self::csv::{format_csv, render_csv};
pub use self::plot::{render_plot, PlotData};
pub use self::table::{format_table, render_table, NO_COMMON_MESSAGE};

use crate::error::Result;
use crate::loader::BenchmarkResultSet;

/// Prints the comparison of `a` and `b` to stdout, as a table or as CSV.
///
/// When the sets share no benchmark the diagnostic [`NO_COMMON_MESSAGE`] is
/// printed instead and `Ok(false)` is returned, leaving the exit status to
/// the caller.
///
/// # Errors
///
/// Only CSV serialization can fail.
pub fn print_table(
    a: &BenchmarkResultSet,
    b: &BenchmarkResultSet,
    a_label: &str,
    b_label: &str,
    csv: bool,
) -> Result<bool> {
    let rendered = if csv {
        render_csv(a, b, a_label, b_label)?
    } else {
        render_table(a, b, a_label, b_label)
    };

    match rendered {
        Some(text) => {
            print!("{}", text);
            Ok(true)
        }
        None => {
            println!("{}", NO_COMMON_MESSAGE);
            Ok(false)
        }
    }
}
