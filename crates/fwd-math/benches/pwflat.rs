use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fwd_math::pwflat;

fn knots(n: usize) -> (Vec<f64>, Vec<f64>) {
    let t: Vec<f64> = (1..=n).map(|i| i as f64 * 0.25).collect();
    let f: Vec<f64> = (0..n).map(|i| 0.02 + 0.001 * (i % 7) as f64).collect();
    (t, f)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pwflat");
    for n in [8, 64, 512] {
        let (t, f) = knots(n);
        let u = t[n / 2] + 0.1;
        group.bench_with_input(BenchmarkId::new("value", n), &n, |b, _| {
            b.iter(|| pwflat::value(black_box(u), &t, &f, 0.03))
        });
        group.bench_with_input(BenchmarkId::new("integral", n), &n, |b, _| {
            b.iter(|| pwflat::integral(black_box(u), &t, &f, 0.03))
        });
        group.bench_with_input(BenchmarkId::new("translate", n), &n, |b, _| {
            let mut scratch = t.clone();
            b.iter(|| {
                let view = fwd_math::Translated::new(black_box(u), &mut scratch);
                view.len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
