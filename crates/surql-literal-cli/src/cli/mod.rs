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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::io::{self, Write};
use surql_literal::LiteralConfig;

/// Top-level CLI commands enum.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use surql_literal_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Escape a value for use inside a single-quoted SurrealQL string
    ///
    /// Invalid UTF-8 is dropped and every `'` becomes `\'`. Backslashes are
    /// not escaped.
    Escape {
        /// Text to escape (reads raw bytes from stdin if omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Wrap the result in single quotes
        #[arg(short, long)]
        quote: bool,
    },

    /// Format category IDs as a SurrealQL array literal
    ///
    /// Renders `[a, b, c]` in the given order, or `[]` when no IDs are given.
    Array {
        /// Category IDs
        #[arg(value_name = "IDS")]
        ids: Vec<String>,

        /// Read IDs from stdin, one per line
        #[arg(long, conflicts_with = "ids")]
        stdin: bool,
    },
}

impl Commands {
    /// Execute the command, writing its result to stdout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if stdin cannot be read, stdout cannot be written, or
    /// the input exceeds `limits`.
    pub fn execute(self, limits: Option<&LiteralConfig>) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self {
            Commands::Escape { text, quote } => {
                let input = match text {
                    Some(text) => text.into_bytes(),
                    None => {
                        let raw = commands::read_stdin()?;
                        commands::strip_line_ending(&raw).to_vec()
                    }
                };
                commands::escape(&input, quote, limits, &mut out)?;
            }
            Commands::Array { ids, stdin } => {
                let ids = if stdin {
                    commands::split_lines(&commands::read_stdin()?)
                } else {
                    ids
                };
                commands::array(&ids, limits, &mut out)?;
            }
        }

        out.flush().map_err(|e| CliError::io_error("<stdout>", e))
    }
}
