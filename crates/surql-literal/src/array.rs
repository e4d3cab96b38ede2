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

//! Category ID arrays.
//!
//! SurrealQL array literals are rendered as `[a, b, c]`, each element run
//! through [`sanitize`](crate::escape::sanitize). An absent list and an empty
//! list both render as `[]`.

use crate::config::LiteralConfig;
use crate::error::{LiteralError, Result};
use crate::escape::{sanitize, sanitize_bytes, validate_string_length};
use std::borrow::Cow;

const SEPARATOR: &str = ", ";

/// Return the IDs, or an empty vector when they are absent.
///
/// # Examples
///
/// ```
/// # use surql_literal::normalize_ids;
/// assert!(normalize_ids::<String>(None).is_empty());
/// assert_eq!(normalize_ids(Some(vec!["x"])), vec!["x"]);
/// ```
pub fn normalize_ids<T>(ids: Option<Vec<T>>) -> Vec<T> {
    ids.unwrap_or_default()
}

/// Borrowed counterpart of [`normalize_ids`].
pub fn normalize_id_slice<S>(ids: Option<&[S]>) -> &[S] {
    ids.unwrap_or_default()
}

/// Render category IDs as a SurrealQL array literal.
///
/// Order is preserved exactly; there is no deduplication, sorting or quoting
/// of elements.
///
/// # Examples
///
/// ```
/// # use surql_literal::format_id_array;
/// assert_eq!(format_id_array(Some(&["a", "b"][..])), "[a, b]");
/// assert_eq!(format_id_array(Some(&["O'Brien"][..])), "[O\\'Brien]");
/// assert_eq!(format_id_array::<&str>(None), "[]");
/// ```
pub fn format_id_array<S: AsRef<str>>(ids: Option<&[S]>) -> String {
    join_bracketed(normalize_id_slice(ids), |id| sanitize(id.as_ref()))
}

/// Like [`format_id_array`] but for elements that may not be valid UTF-8.
///
/// Invalid byte sequences in each element are dropped before escaping.
pub fn format_id_array_bytes<B: AsRef<[u8]>>(ids: Option<&[B]>) -> String {
    join_bracketed(normalize_id_slice(ids), |id| sanitize_bytes(id.as_ref()))
}

/// Limit-checked variant of [`format_id_array`].
///
/// Fails if there are more than `config.max_elements` IDs or if any ID is
/// longer than `config.max_string_length` bytes. Absent IDs render as `[]`.
pub fn try_format_id_array<S: AsRef<str>>(
    ids: Option<&[S]>,
    config: &LiteralConfig,
) -> Result<String> {
    let ids = normalize_id_slice(ids);

    if let Some(max_count) = config.max_elements {
        if ids.len() > max_count {
            return Err(LiteralError::ElementCountExceeded {
                count: ids.len(),
                max_count,
            });
        }
    }

    for (index, id) in ids.iter().enumerate() {
        validate_string_length(id.as_ref(), &format!("category_ids[{}]", index), config)?;
    }

    Ok(format_id_array(Some(ids)))
}

fn join_bracketed<'a, T, F>(items: &'a [T], render: F) -> String
where
    F: Fn(&'a T) -> Cow<'a, str>,
{
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::with_capacity(2 + items.len() * 16);
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(&render(item));
    }
    out.push(']');
    out
}
