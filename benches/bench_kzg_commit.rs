use ark_bn254::Fr;
use ark_std::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use rust_shplonk_bn254::{kzg::UnivariateKzg, polynomial::PolynomialCoeffForm};
use std::time::Duration;

fn random_poly(len: usize) -> PolynomialCoeffForm {
    let mut rng = rand::thread_rng();
    PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
}

fn bench_kzg_commit(c: &mut Criterion) {
    let mut kzg = UnivariateKzg::new();
    kzg.setup(16384).unwrap();

    for size in [4096usize, 8192, 16384] {
        let input_poly = random_poly(size);
        c.bench_function(&format!("bench_kzg_commit_{}", size), |b| {
            b.iter(|| kzg.commit(&input_poly).unwrap());
        });
    }

    c.bench_function("bench_kzg_commit_batched_8x4096", |b| {
        let polys: Vec<PolynomialCoeffForm> = (0..8).map(|_| random_poly(4096)).collect();
        b.iter(|| {
            kzg.set_batch_mode(polys.len()).unwrap();
            for (index, poly) in polys.iter().enumerate() {
                kzg.commit_batched(poly, index).unwrap();
            }
            kzg.get_batch_commitments().unwrap()
        });
    });
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5)) // Warm-up time
        .measurement_time(Duration::from_secs(10)) // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_commit
);
criterion_main!(benches);
