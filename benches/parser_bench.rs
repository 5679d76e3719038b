// benches/parser_bench.rs
//! Benchmarks for production report parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rrc_production::{parse_production, WellType};

fn create_sample_report(months: usize) -> String {
    let mut csv = String::new();
    for line in 1..=10 {
        csv.push_str(&format!("\"Specific Lease Production Query, line {}\"\n", line));
    }
    for i in 0..months {
        let month = format!("{:02}/{}", i % 12 + 1, 1993 + i / 12);
        if i % 12 == 0 {
            csv.push_str(&format!(
                "{},\"{},{:03}\",\"1,000\",250,240,\"OPERATOR {}\",,\"FIELD {}\"\n",
                month,
                i / 1000 + 1,
                i % 1000,
                i / 12,
                i / 12
            ));
        } else {
            csv.push_str(&format!("{},{},990,250,240\n", month, 1000 + i));
        }
    }
    csv.push_str("TOTAL,0,0,0,0\n");
    csv
}

fn bench_parse_production(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_production");

    for months in [12, 120, 384].iter() {
        let report = create_sample_report(*months);
        group.bench_with_input(BenchmarkId::new("oil", months), &report, |b, report| {
            b.iter(|| parse_production(black_box(report), WellType::Oil))
        });
        group.bench_with_input(BenchmarkId::new("gas", months), &report, |b, report| {
            b.iter(|| parse_production(black_box(report), WellType::Gas))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_production);
criterion_main!(benches);
