use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use gf2_poly::{gcd, Poly};

fn bench_mul_mod(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("mul_mod");

    for degree in [64usize, 256, 511, 1000] {
        let modulus = Poly::from_exponents(&[degree, 1, 0]).unwrap();
        let a = Poly::random(degree, 0.5, &mut rng);
        let b = Poly::random(degree, 0.5, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &degree, |bench, _| {
            bench.iter(|| black_box(&a).mul_mod(black_box(&b), &modulus).unwrap())
        });
    }
    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    let a = Poly::random(1000, 0.5, &mut rng);
    let b = Poly::random(900, 0.5, &mut rng);
    c.bench_function("gcd 1000x900", |bench| {
        bench.iter(|| gcd(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_mul_mod, bench_gcd);
criterion_main!(benches);
