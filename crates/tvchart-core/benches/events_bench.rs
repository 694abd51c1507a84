use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tvchart_core::{Event, Figure, Theme};

/// Pseudo-random but deterministic times so inserts land all over the list.
fn gen_times(n: usize) -> Vec<i64> {
    let mut x = 0x2545_f491_u64;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x % 1_000_000) as i64
        })
        .collect()
}

fn bench_add_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_event");
    for &n in &[100usize, 1_000, 10_000] {
        let times = gen_times(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &times, |b, times| {
            b.iter_batched(
                || Figure::new("bench", Theme::dark()),
                |mut fig| {
                    for &t in times {
                        fig.add_event(Event::new(t, "e"));
                    }
                    black_box(fig.events().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_event);
criterion_main!(benches);
