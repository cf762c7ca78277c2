use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use arith::{Parser, Script};

static SIMPLE_EXPRESSION: &str = "1 * 2 + 15 / 3 + 2;";

static NESTED_EXPRESSION: &str = "\
((1 + 2) * (3 + 4) - (5 * 6) / (7 - 8)) * (((9 + 10) / 11) - 12);
-(13 + 14) * -(15 - 16);
100 / 10 / 5 * 2 + 1 - 2 + 3 - 4;";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| black_box(Parser::new(SIMPLE_EXPRESSION).parse()))
    });
    c.bench_function("parse_nested", |b| {
        b.iter(|| black_box(Parser::new(NESTED_EXPRESSION).parse()))
    });
    c.bench_function("compile_nested", |b| {
        b.iter(|| black_box(Script::new("bench", NESTED_EXPRESSION).unwrap()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
