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

//! surql-literal Command Line Interface

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use surql_literal_cli::cli::Commands;
use surql_literal_cli::commands::load_limits;
use tracing_subscriber::EnvFilter;

/// surql-literal - SurrealQL literal escaping toolkit
///
/// # Examples
///
/// ```bash
/// # Escape a value
/// surql-literal escape "O'Brien"
///
/// # Build an array literal from arguments or stdin
/// surql-literal array tag:rust tag:db
/// cut -f1 categories.tsv | surql-literal array --stdin --strict
/// ```
#[derive(Parser)]
#[command(name = "surql-literal")]
#[command(author, version, about = "surql-literal - SurrealQL literal escaping toolkit", long_about = None)]
struct Cli {
    /// JSON file with limits (max_string_length, max_elements)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Apply conservative limits for untrusted input
    #[arg(long, global = true, conflicts_with = "config")]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("surql_literal=warn,surql_literal_cli=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = load_limits(cli.config.as_deref(), cli.strict)
        .and_then(|limits| cli.command.execute(limits.as_ref()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
