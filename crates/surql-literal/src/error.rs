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

//! Error types for the limit-checked literal functions.

use thiserror::Error;

/// Error type for checked literal operations.
///
/// The plain sanitizing and formatting functions never fail; these errors
/// only come from the `try_*` variants and from loading a configuration.
#[derive(Debug, Error)]
pub enum LiteralError {
    /// String length limit exceeded.
    #[error("string length {length} exceeds maximum allowed length {max_length} for '{context}'")]
    StringLengthExceeded {
        /// Actual length of the string in bytes.
        length: usize,
        /// Maximum allowed length in bytes.
        max_length: usize,
        /// What was being checked (e.g. `category_ids[3]`).
        context: String,
    },

    /// Element count limit exceeded.
    #[error("array of {count} elements exceeds maximum allowed count {max_count}")]
    ElementCountExceeded {
        /// Number of elements supplied.
        count: usize,
        /// Maximum allowed elements.
        max_count: usize,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for checked literal operations.
pub type Result<T> = std::result::Result<T, LiteralError>;
