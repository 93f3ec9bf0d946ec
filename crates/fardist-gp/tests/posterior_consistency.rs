use fardist_core::Domain;
use fardist_gp::{conditioned_covmat, conditioned_mu, k_se};

const NOISEVAR: f64 = 1e-7;

#[test]
fn single_observation_matches_the_closed_form() {
    // with one observation the posterior mean reduces to
    // k(x, x0) * y0 / (sigvar + noisevar)
    let domain = Domain::linspace(0.0, 1.0, 25).unwrap();
    let x0 = 0.4;
    let y0 = 1.7;
    let lengthscale = 0.2;
    let sigvar = 1.5;

    let mu = conditioned_mu(domain.as_slice(), &[x0], &[y0], lengthscale, sigvar, NOISEVAR)
        .unwrap();
    for (i, &x) in domain.as_slice().iter().enumerate() {
        let diff = x - x0;
        let k = sigvar * (-diff * diff / (2.0 * lengthscale * lengthscale)).exp();
        let expected = k * y0 / (sigvar + NOISEVAR);
        assert!(
            (mu[i] - expected).abs() < 1e-10,
            "mu[{i}] = {} but closed form gives {expected}",
            mu[i]
        );
    }
}

#[test]
fn posterior_covariance_is_symmetric_with_nonnegative_diagonal() {
    let domain = Domain::linspace(0.0, 1.0, 40).unwrap();
    let x_obs = [0.15, 0.5, 0.85];
    let lengthscale = 0.0625;
    let k_domain = k_se(domain.as_slice(), domain.as_slice(), lengthscale, 1.0);
    let cov = conditioned_covmat(
        domain.as_slice(),
        &k_domain,
        &x_obs,
        lengthscale,
        1.0,
        NOISEVAR,
    )
    .unwrap();

    for i in 0..domain.len() {
        assert!(cov[(i, i)] > -1e-9, "negative variance at {i}: {}", cov[(i, i)]);
        for j in 0..domain.len() {
            assert!((cov[(i, j)] - cov[(j, i)]).abs() < 1e-9);
        }
    }
}

#[test]
fn conditioning_never_raises_pointwise_variance() {
    let domain = Domain::linspace(0.0, 1.0, 30).unwrap();
    let lengthscale = 0.25;
    let k_domain = k_se(domain.as_slice(), domain.as_slice(), lengthscale, 1.0);
    let cov = conditioned_covmat(
        domain.as_slice(),
        &k_domain,
        &[0.3, 0.6],
        lengthscale,
        1.0,
        NOISEVAR,
    )
    .unwrap();
    for i in 0..domain.len() {
        assert!(cov[(i, i)] <= k_domain[(i, i)] + 1e-9);
    }
}
