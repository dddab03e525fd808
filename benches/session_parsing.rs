//! Benchmarks for HRM session parsing
//!
//! Measures:
//! - Full text-to-record parsing for typical session sizes
//! - Sample table parsing alone
//! - Distance derivation over an already parsed sample sequence
//!
//! Platform: Cross-platform (synthetic fixtures, CI-safe)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hrm_session::hrm::distance::derive_distances;
use hrm_session::hrm::samples::parse_samples;
use hrm_session::test_utils::HrmFixture;
use hrm_session::{FeatureFlags, HrmParser, SamplePolicy};
use std::hint::black_box;

/// One hour, two hours and a long ride at a 5 s interval
const ROW_COUNTS: [usize; 3] = [720, 1440, 8640];

fn session_text(rows: usize) -> String {
    HrmFixture::new()
        .mode("111110001")
        .repeat_row(&["142", "284", "88", "312", "215", "0", "1012"], rows)
        .build()
}

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_parse");
    let parser = HrmParser::new();

    for rows in ROW_COUNTS {
        let text = session_text(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| black_box(parser.parse(black_box(text)).expect("fixture parses")))
        });
    }

    group.finish();
}

fn bench_sample_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_table");
    let features = FeatureFlags::from_mode("111110001");

    for rows in ROW_COUNTS {
        let text = session_text(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| {
                black_box(
                    parse_samples(black_box(text), &features, SamplePolicy::Lenient)
                        .expect("fixture parses"),
                )
            })
        });
    }

    group.finish();
}

fn bench_distance_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_derivation");
    let features = FeatureFlags::from_mode("111110001");

    for rows in ROW_COUNTS {
        let samples = parse_samples(&session_text(rows), &features, SamplePolicy::Lenient)
            .expect("fixture parses");
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &samples, |b, samples| {
            b.iter(|| {
                let mut samples = samples.clone();
                black_box(derive_distances(&mut samples, black_box(5.0), true))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_parse, bench_sample_table, bench_distance_derivation);
criterion_main!(benches);
