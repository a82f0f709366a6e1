use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio::portfolio::{SampleDataProvider, Section};

fn bench_generate_series(c: &mut Criterion) {
    let provider = SampleDataProvider::new(Some(42));
    for section in [Section::RevenueAnalysis, Section::AiTriage] {
        c.bench_with_input(
            BenchmarkId::new("generate_series", section.slug()),
            &section,
            |b, section| {
                b.iter(|| provider.generate_series(black_box(*section)));
            },
        );
    }
}

criterion_group!(benches, bench_generate_series);
criterion_main!(benches);
