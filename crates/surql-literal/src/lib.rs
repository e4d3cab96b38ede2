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

//! Escaping and array-formatting helpers for SurrealQL query fragments.
//!
//! This crate provides the small set of functions a query-construction layer
//! needs to splice untrusted text into SurrealQL:
//! - Repair arbitrary bytes into valid UTF-8 by dropping invalid sequences
//! - Escape single quotes so a value can sit inside `'...'`
//! - Render category ID lists as `[a, b, c]` array literals
//!
//! All of these are pure and never fail. Limit-checked `try_*` variants are
//! available for input from untrusted sources.
//!
//! # Example
//!
//! ```rust
//! use surql_literal::{format_id_array, normalize_ids, quote_string, sanitize};
//!
//! let name = sanitize("O'Brien");
//! assert_eq!(name, "O\\'Brien");
//!
//! let ids = normalize_ids(Some(vec!["category:rust", "category:db"]));
//! let query = format!(
//!     "SELECT * FROM note WHERE author = {} AND categories CONTAINSANY {}",
//!     quote_string("O'Brien"),
//!     format_id_array(Some(ids.as_slice())),
//! );
//! assert_eq!(
//!     query,
//!     "SELECT * FROM note WHERE author = 'O\\'Brien' AND categories CONTAINSANY [category:rust, category:db]"
//! );
//! ```
//!
//! # Escaping Limits
//!
//! Only the single quote is escaped. Backslashes pass through untouched, so
//! a value ending in `\` can still swallow the closing quote of a literal.
//! Prefer bound parameters wherever the query API allows them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod config;
pub mod error;
pub mod escape;

// Re-export main types at crate root for convenience
pub use array::{
    format_id_array, format_id_array_bytes, normalize_id_slice, normalize_ids,
    try_format_id_array,
};
pub use config::{LiteralConfig, LiteralConfigBuilder, DEFAULT_MAX_STRING_LENGTH};
pub use error::{LiteralError, Result};
pub use escape::{
    needs_escaping, quote_bytes, quote_string, sanitize, sanitize_bytes, to_valid_utf8,
    try_quote_bytes, try_sanitize, validate_string_length,
};
