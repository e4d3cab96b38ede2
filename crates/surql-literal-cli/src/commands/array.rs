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

//! Array command - render category IDs as an array literal

use super::write_line;
use crate::error::CliError;
use std::io::Write;
use surql_literal::{format_id_array, to_valid_utf8, try_format_id_array, LiteralConfig};

/// Split stdin into IDs, one per line.
///
/// Each line is repaired to valid UTF-8 first; lines that are empty after
/// repair are skipped. `\r\n` endings are accepted.
pub fn split_lines(input: &[u8]) -> Vec<String> {
    input
        .split(|b| *b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .map(|line| to_valid_utf8(line).into_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Format `ids` and write the array literal followed by a newline.
///
/// # Examples
///
/// ```
/// use surql_literal_cli::commands::array;
///
/// let ids = vec!["b".to_string(), "a".to_string()];
/// let mut out = Vec::new();
/// array(&ids, None, &mut out).unwrap();
/// assert_eq!(out, b"[b, a]\n");
/// ```
pub fn array(
    ids: &[String],
    limits: Option<&LiteralConfig>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rendered = match limits {
        Some(config) => try_format_id_array(Some(ids), config)?,
        None => format_id_array(Some(ids)),
    };
    write_line(out, &rendered)
}
