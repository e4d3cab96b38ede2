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

//! Sanitizer and array formatter benchmarks.
//!
//! Compares the zero-copy path (no quotes) against the escaping path, and
//! measures array rendering at a few list sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use surql_literal::{format_id_array, sanitize, sanitize_bytes};

const STANDARD_SIZES: [usize; 3] = [10, 100, 1_000];

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    let clean = "category:knowledge-management".repeat(8);
    let quoted = "O'Brien's category".repeat(8);
    let mut invalid = quoted.clone().into_bytes();
    invalid.insert(10, 0xFF);

    group.throughput(Throughput::Bytes(clean.len() as u64));
    group.bench_function("clean", |b| b.iter(|| sanitize(black_box(&clean))));
    group.throughput(Throughput::Bytes(quoted.len() as u64));
    group.bench_function("quoted", |b| b.iter(|| sanitize(black_box(&quoted))));
    group.throughput(Throughput::Bytes(invalid.len() as u64));
    group.bench_function("invalid_utf8", |b| {
        b.iter(|| sanitize_bytes(black_box(&invalid)))
    });

    group.finish();
}

fn bench_format_id_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_id_array");

    for size in STANDARD_SIZES {
        let ids: Vec<String> = (0..size)
            .map(|i| {
                if i % 10 == 0 {
                    format!("category:o'neil_{}", i)
                } else {
                    format!("category:{}", i)
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ids, |b, ids| {
            b.iter(|| format_id_array(Some(black_box(ids.as_slice()))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sanitize, bench_format_id_array);
criterion_main!(benches);
