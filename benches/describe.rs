//! Performance benchmarks for a3s-cron-describe
//!
//! Run with: cargo bench

use a3s_cron_describe::locale::{English, Russian};
use a3s_cron_describe::{DescriptionOptions, ExpressionDescriptor, ExpressionParser, LocaleCatalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EXPRESSIONS: [&str; 6] = [
    "* * * * *",
    "*/5 * * * *",
    "0 9 * * MON-FRI",
    "0 0 1 1 *",
    "10-30/5 8-18 1,15 1-6 * 2030",
    "0 0 * * 5#3",
];

fn bench_parse(c: &mut Criterion) {
    let parser = ExpressionParser::default();

    c.bench_function("ExpressionParser::parse", |b| {
        b.iter(|| {
            for expression in EXPRESSIONS {
                black_box(parser.parse(black_box(expression)).unwrap());
            }
        });
    });
}

fn bench_describe(c: &mut Criterion) {
    let options = DescriptionOptions::default();

    c.bench_function("describe en", |b| {
        let descriptor = ExpressionDescriptor::new(&English, &options);
        b.iter(|| {
            for expression in EXPRESSIONS {
                black_box(descriptor.describe(black_box(expression)).unwrap());
            }
        });
    });

    c.bench_function("describe ru", |b| {
        let descriptor = ExpressionDescriptor::new(&Russian, &options);
        b.iter(|| {
            for expression in EXPRESSIONS {
                black_box(descriptor.describe(black_box(expression)).unwrap());
            }
        });
    });
}

fn bench_catalog(c: &mut Criterion) {
    c.bench_function("LocaleCatalog::bundled", |b| {
        b.iter(LocaleCatalog::bundled);
    });

    let catalog = LocaleCatalog::bundled();
    let options = DescriptionOptions::default().with_locale("pt_BR");
    c.bench_function("LocaleCatalog::describe pt_BR", |b| {
        b.iter(|| catalog.describe(black_box("0 9 * * 1-5"), &options).unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_describe, bench_catalog);
criterion_main!(benches);
