use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modular::{Modular, Residue};
use num_traits::Pow;
use rand::prelude::*;

const SMALL_P: Residue = 132120577;
const LARGE_P: Residue = 0x7FFF_FFFF_FFFF_FFE7;

type Small = Modular<SMALL_P>;
type Large = Modular<LARGE_P>;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let x: Small = rng.gen();
    let y = Small::new(rng.gen_range(1..SMALL_P));
    let e: u64 = rng.gen();

    let mut group = c.benchmark_group("small modulus");

    group.bench_function("small modulus new", |b| {
        b.iter(|| Small::new(black_box(-123456789012)))
    });

    group.bench_function("small modulus add", |b| {
        b.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("small modulus sub", |b| {
        b.iter(|| black_box(x) - black_box(y))
    });

    group.bench_function("small modulus mul", |b| {
        b.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("small modulus neg", |b| b.iter(|| -black_box(x)));

    group.bench_function("small modulus div", |b| {
        b.iter(|| black_box(x).try_div(black_box(y)))
    });

    group.bench_function("small modulus rem", |b| {
        b.iter(|| black_box(x).try_rem(black_box(y)))
    });

    group.bench_function("small modulus pow", |b| {
        b.iter(|| black_box(x).pow(black_box(e)))
    });

    group.finish();

    let x: Large = rng.gen();
    let y = Large::new(rng.gen_range(1..LARGE_P));

    let mut group = c.benchmark_group("large modulus");

    group.bench_function("large modulus add", |b| {
        b.iter(|| black_box(x) + black_box(y))
    });

    group.bench_function("large modulus mul", |b| {
        b.iter(|| black_box(x) * black_box(y))
    });

    group.bench_function("large modulus pow", |b| {
        b.iter(|| black_box(x).pow(black_box(e)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
