use criterion::{criterion_group, criterion_main, Criterion};
use fardist_core::Domain;
use fardist_gp::{conditioned_covmat, conditioned_mu, k_se};

fn bench_conditioning(c: &mut Criterion) {
    let domain = Domain::linspace(0.0, 1.0, 100).unwrap();
    let x_obs = [0.12, 0.47, 0.83];
    let y_obs = [0.9, -0.4, 1.3];

    c.bench_function("conditioned_mu_100pt", |b| {
        b.iter(|| conditioned_mu(domain.as_slice(), &x_obs, &y_obs, 0.0625, 1.0, 1e-7).unwrap())
    });

    let k_domain = k_se(domain.as_slice(), domain.as_slice(), 0.0625, 1.0);
    c.bench_function("conditioned_covmat_100pt", |b| {
        b.iter(|| {
            conditioned_covmat(domain.as_slice(), &k_domain, &x_obs, 0.0625, 1.0, 1e-7).unwrap()
        })
    });
}

criterion_group!(benches, bench_conditioning);
criterion_main!(benches);
