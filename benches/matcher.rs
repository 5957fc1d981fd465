// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use proteus::matcher::Matcher;

mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `matcher.eval`, `matcher.emit`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `ident`, `composed_16`).
fn identifier_matcher() -> Matcher {
    Matcher::or(vec![
        Matcher::range('a', 'z'),
        Matcher::range('A', 'Z'),
        Matcher::range('0', '9'),
        Matcher::literal('_'),
    ])
}

fn composed_matcher(width: usize) -> Matcher {
    let operands = (0..width)
        .map(|index| {
            let lo = (b'a' + (index % 13) as u8) as char;
            let hi = (b'n' + (index % 13) as u8) as char;
            Matcher::minus(
                Matcher::range(lo, hi),
                Matcher::not(Matcher::range('a', 'z')),
            )
        })
        .collect::<Vec<_>>();
    Matcher::or(operands)
}

fn sample_text() -> String {
    let mut text = String::with_capacity(4096);
    for index in 0..4096u32 {
        let ch = char::from_u32(32 + (index % 96)).unwrap_or(' ');
        text.push(ch);
    }
    text
}

fn checksum_matches(matcher: &Matcher, text: &str) -> u64 {
    let mut acc = 0u64;
    for ch in text.chars() {
        acc = acc.wrapping_mul(131).wrapping_add(matcher.matches(ch) as u64);
    }
    acc
}

fn bench_eval(c: &mut Criterion) {
    let text = sample_text();
    let mut group = c.benchmark_group("matcher.eval");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for (case, matcher) in [
        ("ident", identifier_matcher()),
        ("composed_16", composed_matcher(16)),
        ("composed_64", composed_matcher(64)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(case), &matcher, |b, matcher| {
            b.iter(|| checksum_matches(black_box(matcher), black_box(&text)));
        });
    }

    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher.emit");

    for (case, matcher) in [
        ("ident", identifier_matcher()),
        ("composed_16", composed_matcher(16)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(case), &matcher, |b, matcher| {
            b.iter(|| {
                let rendered = matcher.render();
                let emitted = matcher.emit_expression();
                black_box((rendered.len(), emitted.len()))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = bench_eval, bench_emit
}
criterion_main!(benches);
