use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digitmix::DigitGenerator;

fn bench_digits(rounds: u32) {
    let mut gen = DigitGenerator::seeded();
    for _ in 0..rounds {
        gen.next_digit();
    }
}

fn outer_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_digits");
    for rounds in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("bench_digits", rounds), rounds, |b, s| {
            b.iter(|| bench_digits(*s))
        });
    }
    group.finish();
}

criterion_group!(benches, outer_bench);
criterion_main!(benches);
