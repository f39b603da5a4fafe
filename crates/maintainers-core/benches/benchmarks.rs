//! Benchmarks for maintainers-core
//!
//! Run with: cargo bench -p maintainers-core --features generate
//!
//! Filter benchmarks:
//!   cargo bench -- "parsing"
//!   cargo bench -- "parsing/file"

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maintainers_core::parse::{self, ParserConfig, classify_line, parse_str};

mod fixtures;
use fixtures::{fixture_paths, fixtures, noisy_fixture};

/// Benchmark in-memory parsing across all fixture sizes
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let config = ParserConfig::strict();

    for (name, content) in fixtures() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_str", name), content, |b, input| {
            b.iter(|| parse_str(std::hint::black_box(input), "bench", &config))
        });
    }

    let noisy = noisy_fixture();
    group.throughput(Throughput::Bytes(noisy.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("parse_str_lenient", "noisy"),
        noisy,
        |b, input| {
            b.iter(|| parse_str(std::hint::black_box(input), "bench", &ParserConfig::lenient()))
        },
    );
    group.finish();
}

/// Benchmark the file entry point, including open and buffered reads
fn bench_parsing_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing/file");

    for (name, path) in fixture_paths() {
        group.bench_with_input(BenchmarkId::new("parse", name), path, |b, path| {
            b.iter(|| parse::parse(std::hint::black_box(path), false))
        });
    }
    group.finish();
}

/// Benchmark line classification per layout
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let lines = [
        ("bare", "octocat"),
        ("login_email", "octocat <octocat@example.com>"),
        ("name_email_login", "Mona Lisa <mona@example.com> (@octocat)"),
        ("malformed", "this is not valid"),
    ];

    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::new("classify_line", name), line, |b, line| {
            b.iter(|| classify_line(std::hint::black_box(line)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_parsing_file, bench_classify);
criterion_main!(benches);
