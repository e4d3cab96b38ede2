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

//! Limits applied by the checked `try_*` functions.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default maximum byte length of a single input string: 1 MiB.
///
/// Category IDs and tag names are short; anything near this size is almost
/// certainly not meant to end up inside a query string.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Configuration for the limit-checked literal functions.
///
/// The unchecked functions (`sanitize`, `format_id_array`, ...) ignore this
/// entirely; it only matters for [`crate::try_sanitize`] and
/// [`crate::try_format_id_array`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralConfig {
    /// Maximum byte length of any single string (default: 1 MiB, None = unlimited).
    pub max_string_length: Option<usize>,

    /// Maximum number of elements in an ID array (default: None = unlimited).
    pub max_elements: Option<usize>,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            max_string_length: Some(DEFAULT_MAX_STRING_LENGTH),
            max_elements: None,
        }
    }
}

/// Builder for LiteralConfig.
///
/// # Examples
///
/// ```
/// # use surql_literal::LiteralConfig;
/// let config = LiteralConfig::builder()
///     .max_string_length(256)
///     .max_elements(50)
///     .build();
/// assert_eq!(config.max_elements, Some(50));
/// ```
#[derive(Debug, Default)]
pub struct LiteralConfigBuilder {
    max_string_length: Option<Option<usize>>,
    max_elements: Option<Option<usize>>,
}

impl LiteralConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum byte length for input strings.
    pub fn max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(Some(max));
        self
    }

    /// Remove the string length limit.
    pub fn no_string_length_limit(mut self) -> Self {
        self.max_string_length = Some(None);
        self
    }

    /// Set maximum number of elements in an ID array.
    pub fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(Some(max));
        self
    }

    /// Build the LiteralConfig instance.
    ///
    /// All unset fields will use their default values.
    pub fn build(self) -> LiteralConfig {
        let defaults = LiteralConfig::default();
        LiteralConfig {
            max_string_length: self.max_string_length.unwrap_or(defaults.max_string_length),
            max_elements: self.max_elements.unwrap_or(defaults.max_elements),
        }
    }
}

impl LiteralConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for LiteralConfig.
    pub fn builder() -> LiteralConfigBuilder {
        LiteralConfigBuilder::default()
    }

    /// Set maximum byte length for input strings.
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(max);
        self
    }

    /// Remove the string length limit.
    pub fn without_string_length_limit(mut self) -> Self {
        self.max_string_length = None;
        self
    }

    /// Set maximum number of elements in an ID array.
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Create a configuration suitable for untrusted input.
    ///
    /// - 64 KiB max string length (vs 1 MiB default)
    /// - 10 000 max array elements (vs unlimited)
    ///
    /// # Examples
    ///
    /// ```
    /// # use surql_literal::LiteralConfig;
    /// let config = LiteralConfig::for_untrusted_input();
    /// assert_eq!(config.max_string_length, Some(64 * 1024));
    /// ```
    pub fn for_untrusted_input() -> Self {
        Self {
            max_string_length: Some(64 * 1024),
            max_elements: Some(10_000),
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
