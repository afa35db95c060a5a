use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use veb_min_queue::{MinQueue, MinSet, OrderedMinQueue};

const UNIVERSE: u64 = 1 << 17;

fn random_values(count: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
    (0..count).map(|_| rng.gen_range(0..count as u32)).collect()
}

fn filled<S: MinSet<u32>>(mut queue: MinQueue<u32, S>, values: &[u32]) -> MinQueue<u32, S> {
    for &value in values {
        queue.enqueue(value).unwrap();
    }
    queue
}

/// Benchmark enqueueing a batch of random values (duplicates included)
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");

    for size in [1000usize, 100_000].iter() {
        let values = random_values(*size);

        group.bench_with_input(BenchmarkId::new("MinQueue", size), &values, |b, values| {
            b.iter(|| black_box(filled(MinQueue::new(UNIVERSE).unwrap(), values)));
        });

        group.bench_with_input(
            BenchmarkId::new("OrderedMinQueue", size),
            &values,
            |b, values| {
                b.iter(|| black_box(filled(OrderedMinQueue::<u32>::ordered(), values)));
            },
        );
    }

    group.finish();
}

/// Benchmark find_min on a populated queue
fn bench_find_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_min");

    for size in [1000usize, 100_000].iter() {
        let values = random_values(*size);

        group.bench_with_input(BenchmarkId::new("MinQueue", size), &values, |b, values| {
            let queue = filled(MinQueue::new(UNIVERSE).unwrap(), values);
            b.iter(|| black_box(queue.find_min()));
        });

        group.bench_with_input(
            BenchmarkId::new("OrderedMinQueue", size),
            &values,
            |b, values| {
                let queue = filled(OrderedMinQueue::<u32>::ordered(), values);
                b.iter(|| black_box(queue.find_min()));
            },
        );
    }

    group.finish();
}

/// Benchmark draining a populated queue
fn bench_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("dequeue");

    for size in [1000usize, 100_000].iter() {
        let values = random_values(*size);

        group.bench_with_input(BenchmarkId::new("MinQueue", size), &values, |b, values| {
            b.iter_batched(
                || filled(MinQueue::new(UNIVERSE).unwrap(), values),
                |mut queue| {
                    while let Ok(value) = queue.dequeue() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("OrderedMinQueue", size),
            &values,
            |b, values| {
                b.iter_batched(
                    || filled(OrderedMinQueue::<u32>::ordered(), values),
                    |mut queue| {
                        while let Ok(value) = queue.dequeue() {
                            black_box(value);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_find_min, bench_dequeue);
criterion_main!(benches);
