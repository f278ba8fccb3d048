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

//! Error types for loading and reporting benchmark results.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! side is [`ReportError`]. The variants carry enough context (paths, benchmark
//! names, labels) for the CLI to print a single actionable line.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for archbench operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while loading, comparing or rendering benchmark results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// The input or output path could not be read, written or listed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// The input exists but its content is not a valid result file.
    #[error("Failed to parse '{path}': {message}")]
    Parse {
        /// Path of the unparseable input.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// The input is larger than the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// Path of the oversized input.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured limit in bytes.
        max: u64,
    },

    /// A benchmark entry carries no name, neither its own nor the suite's.
    #[error("Benchmark entry #{index} in '{path}' has no name")]
    MissingName {
        /// Path of the input.
        path: PathBuf,
        /// Position of the entry in the suite.
        index: usize,
    },

    /// A benchmark has neither a summary nor any recorded samples.
    #[error("Benchmark '{name}' has no samples and no summary")]
    NoSamples {
        /// Benchmark name.
        name: String,
    },

    /// The two result sets share no benchmark names.
    #[error("No common benchmark names found between '{a}' and '{b}'")]
    NoCommonBenchmarks {
        /// Label of the first result set.
        a: String,
        /// Label of the second result set.
        b: String,
    },

    /// No TrueType font could be loaded for chart text.
    #[error("Font error: {0}")]
    Font(String),

    /// Chart rendering failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ReportError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a parse error with path context.
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Returns `true` for errors caused by the inputs sharing no benchmarks.
    pub fn is_empty_intersection(&self) -> bool {
        matches!(self, ReportError::NoCommonBenchmarks { .. })
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ReportError::io_error(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_no_common_benchmarks_display() {
        let err = ReportError::NoCommonBenchmarks {
            a: "arm64".to_string(),
            b: "x86_64".to_string(),
        };
        assert!(err.is_empty_intersection());
        assert_eq!(
            err.to_string(),
            "No common benchmark names found between 'arm64' and 'x86_64'"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = ReportError::NoSamples {
            name: "bench1".to_string(),
        };
        let err2 = ReportError::NoSamples {
            name: "bench1".to_string(),
        };
        let err3 = ReportError::NoSamples {
            name: "bench2".to_string(),
        };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
        assert!(!err1.is_empty_intersection());
    }
}
