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

//! CLI command implementations

mod array;
mod escape;

pub use array::{array, split_lines};
pub use escape::escape;

use crate::error::CliError;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use surql_literal::LiteralConfig;
use tracing::debug;

/// Resolve the limits the checked functions should apply.
///
/// Returns `None` when neither a config file nor `--strict` was given, in
/// which case commands use the unchecked (always succeeding) functions.
///
/// # Errors
///
/// Returns `Err` if the config file cannot be read or is not valid JSON.
pub fn load_limits(config: Option<&Path>, strict: bool) -> Result<Option<LiteralConfig>, CliError> {
    if let Some(path) = config {
        let json = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
        let limits = LiteralConfig::from_json(&json).map_err(|e| CliError::config(path, e))?;
        debug!(path = %path.display(), ?limits, "loaded limits");
        return Ok(Some(limits));
    }

    if strict {
        return Ok(Some(LiteralConfig::for_untrusted_input()));
    }

    Ok(None)
}

/// Read all of stdin as raw bytes. No UTF-8 validation is done here.
pub fn read_stdin() -> Result<Vec<u8>, CliError> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|e| CliError::io_error("<stdin>", e))?;
    debug!(bytes = buf.len(), "read stdin");
    Ok(buf)
}

/// Strip a single trailing `\n` or `\r\n`.
pub fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

fn write_line(out: &mut impl Write, line: &str) -> Result<(), CliError> {
    writeln!(out, "{}", line).map_err(|e| CliError::io_error("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\n\n"), b"abc\n");
        assert_eq!(strip_line_ending(b"abc"), b"abc");
        assert_eq!(strip_line_ending(b""), b"");
    }

    #[test]
    fn test_load_limits_none() {
        assert_eq!(load_limits(None, false).unwrap(), None);
    }

    #[test]
    fn test_load_limits_strict() {
        assert_eq!(
            load_limits(None, true).unwrap(),
            Some(LiteralConfig::for_untrusted_input())
        );
    }

    #[test]
    fn test_load_limits_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_elements": 2}}"#).unwrap();
        let limits = load_limits(Some(file.path()), false).unwrap().unwrap();
        assert_eq!(limits.max_elements, Some(2));
    }

    #[test]
    fn test_load_limits_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_limits(Some(file.path()), false),
            Err(CliError::Config { .. })
        ));

        assert!(matches!(
            load_limits(Some(Path::new("/nonexistent/limits.json")), false),
            Err(CliError::Io { .. })
        ));
    }
}
