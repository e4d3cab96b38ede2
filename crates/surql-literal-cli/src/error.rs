// Dweve SurQL Literal - SurrealDB query literal helpers
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

//! Structured error types for the surql-literal CLI.

use std::io;
use std::path::PathBuf;
use surql_literal::LiteralError;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Implements `Clone` so errors can be captured and compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path (or `<stdin>`/`<stdout>`) involved
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The limits configuration file could not be parsed.
    #[error("Invalid config '{path}': {message}")]
    Config {
        /// The configuration file path
        path: PathBuf,
        /// The parse error message
        message: String,
    },

    /// Input exceeded a configured limit.
    #[error("Limit exceeded: {0}")]
    Limit(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error with path context.
    pub fn config(path: impl Into<PathBuf>, source: LiteralError) -> Self {
        Self::Config {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<LiteralError> for CliError {
    fn from(source: LiteralError) -> Self {
        Self::Limit(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "limits.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("limits.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_config_error_display() {
        let source = surql_literal::LiteralConfig::from_json("{").unwrap_err();
        let err = CliError::config("limits.json", source);
        assert!(err.to_string().starts_with("Invalid config 'limits.json'"));
    }

    #[test]
    fn test_limit_error_conversion() {
        let err: CliError = LiteralError::ElementCountExceeded {
            count: 3,
            max_count: 2,
        }
        .into();
        assert_eq!(
            err,
            CliError::Limit("array of 3 elements exceeds maximum allowed count 2".to_string())
        );
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::Limit("too big".to_string());
        assert_eq!(err.clone(), err);
    }
}
