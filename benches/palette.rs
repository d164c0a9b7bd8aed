use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use series_summary::palette::{categorical, lum_shift, sequential};

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for &count in &[9usize, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| black_box(sequential("#3f51b5", n).unwrap()))
        });
    }
    group.finish();
}

fn bench_lum_shift(c: &mut Criterion) {
    let colors = categorical(1).unwrap();
    c.bench_function("lum_shift_categorical_1", |b| {
        b.iter(|| black_box(lum_shift(colors.as_slice(), 0.2).unwrap()))
    });
}

criterion_group!(benches, bench_sequential, bench_lum_shift);
criterion_main!(benches);
