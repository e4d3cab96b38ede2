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

//! Validation tests for the limit-checked functions.
//!
//! These verify that string length and element count limits reject oversized
//! input before it is rendered into a query literal.

use surql_literal::{
    try_format_id_array, try_sanitize, LiteralConfig, LiteralError, DEFAULT_MAX_STRING_LENGTH,
};

#[test]
fn test_default_config_accepts_typical_ids() {
    let config = LiteralConfig::default();
    let ids: Vec<String> = (0..500).map(|i| format!("category:{}", i)).collect();
    let rendered = try_format_id_array(Some(ids.as_slice()), &config).unwrap();
    assert!(rendered.starts_with("[category:0, category:1, "));
    assert!(rendered.ends_with("category:499]"));
}

#[test]
fn test_default_string_limit() {
    let config = LiteralConfig::default();
    let at_limit = vec![b'x'; DEFAULT_MAX_STRING_LENGTH];
    assert!(try_sanitize(&at_limit, &config).is_ok());

    let over_limit = vec![b'x'; DEFAULT_MAX_STRING_LENGTH + 1];
    let result = try_sanitize(&over_limit, &config);
    assert!(matches!(
        result,
        Err(LiteralError::StringLengthExceeded { max_length, .. }) if max_length == DEFAULT_MAX_STRING_LENGTH
    ));
}

#[test]
fn test_untrusted_config_rejects_large_arrays() {
    let config = LiteralConfig::for_untrusted_input();
    let ids: Vec<String> = (0..10_001).map(|i| i.to_string()).collect();
    let err = try_format_id_array(Some(ids.as_slice()), &config).unwrap_err();
    assert!(matches!(
        err,
        LiteralError::ElementCountExceeded {
            count: 10_001,
            max_count: 10_000
        }
    ));
}

#[test]
fn test_untrusted_config_rejects_long_id() {
    let config = LiteralConfig::for_untrusted_input();
    let ids = vec!["ok".to_string(), "y".repeat(64 * 1024 + 1)];
    let err = try_format_id_array(Some(ids.as_slice()), &config).unwrap_err();
    assert!(err.to_string().contains("category_ids[1]"));
}

#[test]
fn test_unlimited_config() {
    let config = LiteralConfig::default().without_string_length_limit();
    let huge = "z".repeat(4 * DEFAULT_MAX_STRING_LENGTH);
    let rendered = try_format_id_array(Some(&[huge.as_str()][..]), &config).unwrap();
    assert_eq!(rendered.len(), huge.len() + 2);
}

#[test]
fn test_checked_output_matches_unchecked() {
    let config = LiteralConfig::for_untrusted_input();
    let ids = ["O'Brien", "tag:db", "it's"];
    assert_eq!(
        try_format_id_array(Some(&ids[..]), &config).unwrap(),
        surql_literal::format_id_array(Some(&ids[..]))
    );
    assert_eq!(
        try_sanitize(b"O'Brien\xff", &config).unwrap(),
        surql_literal::sanitize_bytes(b"O'Brien\xff")
    );
}

#[test]
fn test_absent_ids_pass_checks() {
    let config = LiteralConfig::default().with_max_elements(0);
    assert_eq!(try_format_id_array::<String>(None, &config).unwrap(), "[]");
}

#[test]
fn test_config_loaded_from_json_is_enforced() {
    let config = LiteralConfig::from_json(r#"{"max_elements": 1, "max_string_length": 4}"#).unwrap();
    assert!(try_format_id_array(Some(&["abcd"][..]), &config).is_ok());
    assert!(try_format_id_array(Some(&["abcde"][..]), &config).is_err());
    assert!(try_format_id_array(Some(&["a", "b"][..]), &config).is_err());
}
