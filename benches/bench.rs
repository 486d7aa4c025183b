use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rb_ordered_set::OrderedSet;
use std::hint::black_box;

struct KeyGenerator {
    rng: StdRng,
    limit: i64,
}
impl KeyGenerator {
    fn new() -> Self {
        const LIMIT: i64 = 1_000_000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> i64 {
        self.rng.gen_range(0..self.limit)
    }
}

// insert helper fn
fn ordered_set_insert(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = OrderedSet::new();
        for key in &keys {
            black_box(set.insert(*key));
        }
    });
}

// insert and remove helper fn
fn ordered_set_insert_remove(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut set = OrderedSet::new();
        for key in &keys {
            black_box(set.insert(*key));
        }
        for key in &keys {
            black_box(set.remove(*key));
        }
    });
}

// lookup helper fn
fn ordered_set_contains(count: usize, bench: &mut Bencher) {
    let mut gen = KeyGenerator::new();
    let keys: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let mut set = OrderedSet::new();
    for key in &keys {
        set.insert(*key);
    }
    bench.iter(|| {
        for key in &keys {
            black_box(set.contains(*key));
        }
    });
}

fn bench_ordered_set_insert(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_insert_100", |b| {
        ordered_set_insert(100, b)
    });
    c.bench_function("bench_ordered_set_insert_1000", |b| {
        ordered_set_insert(1000, b)
    });
    c.bench_function("bench_ordered_set_insert_10,000", |b| {
        ordered_set_insert(10_000, b)
    });
    c.bench_function("bench_ordered_set_insert_100,000", |b| {
        ordered_set_insert(100_000, b)
    });
}

fn bench_ordered_set_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_insert_remove_100", |b| {
        ordered_set_insert_remove(100, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_1000", |b| {
        ordered_set_insert_remove(1000, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_10,000", |b| {
        ordered_set_insert_remove(10_000, b)
    });
    c.bench_function("bench_ordered_set_insert_remove_100,000", |b| {
        ordered_set_insert_remove(100_000, b)
    });
}

fn bench_ordered_set_contains(c: &mut Criterion) {
    c.bench_function("bench_ordered_set_contains_1000", |b| {
        ordered_set_contains(1000, b)
    });
    c.bench_function("bench_ordered_set_contains_10,000", |b| {
        ordered_set_contains(10_000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_ordered_set_insert, bench_ordered_set_insert_remove,
}

criterion_group! {
    name = benches_lookup;
    config = criterion_config();
    targets = bench_ordered_set_contains
}

criterion_main!(benches_basic_op, benches_lookup);
