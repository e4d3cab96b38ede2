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

//! SurrealQL string sanitizing.
//!
//! Everything here is pure and total: malformed UTF-8 is repaired by dropping
//! the offending bytes and single quotes are escaped with a backslash. The
//! only fallible entry points are the limit-checked `try_*`/`validate_*`
//! functions, which consult a [`LiteralConfig`].

use crate::config::LiteralConfig;
use crate::error::{LiteralError, Result};
use std::borrow::Cow;
use tracing::debug;

/// Validate string length against configuration limits.
///
/// The length is measured in bytes. `context` names the value being checked
/// and is carried into the error message.
///
/// # Examples
///
/// ```
/// # use surql_literal::escape::validate_string_length;
/// # use surql_literal::LiteralConfig;
/// let config = LiteralConfig::default().with_max_string_length(8);
/// assert!(validate_string_length("tag:1", "category_id", &config).is_ok());
/// assert!(validate_string_length("tag:123456789", "category_id", &config).is_err());
/// ```
pub fn validate_string_length(s: &str, context: &str, config: &LiteralConfig) -> Result<()> {
    validate_len(s.len(), context, config)
}

pub(crate) fn validate_len(length: usize, context: &str, config: &LiteralConfig) -> Result<()> {
    if let Some(max_length) = config.max_string_length {
        if length > max_length {
            return Err(LiteralError::StringLengthExceeded {
                length,
                max_length,
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

/// Check if a string contains a single quote and therefore needs escaping.
#[inline]
pub fn needs_escaping(s: &str) -> bool {
    s.contains('\'')
}

/// Repair a byte sequence into valid UTF-8 by dropping invalid sequences.
///
/// Invalid bytes are removed outright; no replacement character is inserted.
/// Input that is already valid UTF-8 is borrowed without copying.
///
/// # Examples
///
/// ```
/// # use surql_literal::escape::to_valid_utf8;
/// assert_eq!(to_valid_utf8(b"abc"), "abc");
/// assert_eq!(to_valid_utf8(b"a\xffb\xc3"), "ab");
/// ```
pub fn to_valid_utf8(bytes: &[u8]) -> Cow<'_, str> {
    let err = match std::str::from_utf8(bytes) {
        Ok(valid) => return Cow::Borrowed(valid),
        Err(err) => err,
    };

    let mut repaired = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    let mut rest = bytes;
    let mut next_err = Some(err);

    while let Some(err) = next_err {
        let (valid, tail) = rest.split_at(err.valid_up_to());
        if let Ok(prefix) = std::str::from_utf8(valid) {
            repaired.push_str(prefix);
        }

        // error_len() is None when the input ends mid-sequence
        let skip = err.error_len().unwrap_or(tail.len());
        dropped += skip;
        rest = &tail[skip..];

        next_err = match std::str::from_utf8(rest) {
            Ok(valid) => {
                repaired.push_str(valid);
                None
            }
            Err(err) => Some(err),
        };
    }

    debug!(dropped, input_len = bytes.len(), "dropped invalid UTF-8 bytes");
    Cow::Owned(repaired)
}

/// Escape a string for embedding in a single-quoted SurrealQL string.
///
/// Every `'` becomes `\'`. No other character is touched: backslashes already
/// present in the input are passed through as-is, so the escape is not
/// idempotent and a trailing backslash can still combine with the closing
/// quote. Callers that need full hardening should bind parameters instead.
///
/// Returns `Cow::Borrowed` when the input contains no quote.
///
/// # Examples
///
/// ```
/// # use surql_literal::escape::sanitize;
/// assert_eq!(sanitize("plain"), "plain");
/// assert_eq!(sanitize("O'Brien"), "O\\'Brien");
/// assert_eq!(sanitize(r"C:\dir"), r"C:\dir");
/// ```
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('\'', "\\'"))
}

/// Repair then escape raw bytes.
///
/// Equivalent to [`to_valid_utf8`] followed by [`sanitize`], borrowing from
/// `bytes` when neither step changes anything.
pub fn sanitize_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match to_valid_utf8(bytes) {
        Cow::Borrowed(valid) => sanitize(valid),
        Cow::Owned(repaired) => match sanitize(&repaired) {
            Cow::Borrowed(_) => Cow::Owned(repaired),
            Cow::Owned(escaped) => Cow::Owned(escaped),
        },
    }
}

/// Limit-checked variant of [`sanitize_bytes`].
///
/// The raw input length is validated against `config.max_string_length`
/// before any work is done.
pub fn try_sanitize<'a>(bytes: &'a [u8], config: &LiteralConfig) -> Result<Cow<'a, str>> {
    validate_len(bytes.len(), "text", config)?;
    Ok(sanitize_bytes(bytes))
}

/// Quote a string as a complete single-quoted SurrealQL literal.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", sanitize(s))
}

/// Byte-input counterpart of [`quote_string`].
///
/// Invalid UTF-8 is dropped before escaping, as in [`sanitize_bytes`].
///
/// # Examples
///
/// ```
/// # use surql_literal::escape::quote_bytes;
/// assert_eq!(quote_bytes(b"O'Br\xffien"), "'O\\'Brien'");
/// ```
pub fn quote_bytes(bytes: &[u8]) -> String {
    format!("'{}'", sanitize_bytes(bytes))
}

/// Limit-checked variant of [`quote_bytes`].
pub fn try_quote_bytes(bytes: &[u8], config: &LiteralConfig) -> Result<String> {
    Ok(format!("'{}'", try_sanitize(bytes, config)?))
}
