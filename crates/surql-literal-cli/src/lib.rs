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

//! surql-literal CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **escape**: Escape a value for a single-quoted SurrealQL string
//! - **array**: Render category IDs as a SurrealQL array literal
//!
//! Both read raw bytes from stdin when no arguments are given, so input that
//! is not valid UTF-8 can be piped in and repaired.
//!
//! # Limits
//!
//! `--config <FILE>` loads a JSON [`surql_literal::LiteralConfig`] and
//! `--strict` applies [`surql_literal::LiteralConfig::for_untrusted_input`].
//! With either, oversized input is rejected instead of rendered.
//!
//! # Examples
//!
//! ```
//! use surql_literal_cli::commands::{array, escape};
//!
//! let mut out = Vec::new();
//! escape(b"it's", false, None, &mut out).unwrap();
//! array(&["x".to_string(), "y".to_string()], None, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "it\\'s\n[x, y]\n");
//! ```

pub mod cli;
pub mod commands;
pub mod error;
