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

//! Escape command - sanitize a single value

use super::write_line;
use crate::error::CliError;
use std::io::Write;
use surql_literal::{quote_bytes, sanitize_bytes, try_quote_bytes, try_sanitize, LiteralConfig};

/// Sanitize `input` and write the result followed by a newline.
///
/// With `quote`, the result is wrapped in single quotes so it forms a
/// complete SurrealQL string literal. With `limits`, the checked sanitizer
/// is used and oversized input is rejected.
///
/// # Examples
///
/// ```
/// use surql_literal_cli::commands::escape;
///
/// let mut out = Vec::new();
/// escape(b"O'Brien", true, None, &mut out).unwrap();
/// assert_eq!(out, b"'O\\'Brien'\n");
/// ```
pub fn escape(
    input: &[u8],
    quote: bool,
    limits: Option<&LiteralConfig>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rendered = match (limits, quote) {
        (Some(config), true) => try_quote_bytes(input, config)?,
        (Some(config), false) => try_sanitize(input, config)?.into_owned(),
        (None, true) => quote_bytes(input),
        (None, false) => sanitize_bytes(input).into_owned(),
    };
    write_line(out, &rendered)
}
