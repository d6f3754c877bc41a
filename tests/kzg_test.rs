#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::UniformRand;
    use lazy_static::lazy_static;
    use rust_shplonk_bn254::errors::KzgError;
    use rust_shplonk_bn254::kzg::UnivariateKzg;
    use rust_shplonk_bn254::polynomial::PolynomialCoeffForm;

    const TEST_SETUP_SIZE: usize = 64;

    lazy_static! {
        static ref KZG_INSTANCE: UnivariateKzg = {
            let mut kzg = UnivariateKzg::new();
            kzg.setup_with_secret(TEST_SETUP_SIZE, &Fr::from(424242u64))
                .unwrap();
            kzg
        };
    }

    fn random_poly(len: usize) -> PolynomialCoeffForm {
        let mut rng = rand::thread_rng();
        PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
    }

    #[test]
    fn test_commit_before_setup_errors() {
        let kzg = UnivariateKzg::new();
        let poly = random_poly(4);
        assert_eq!(kzg.commit(&poly), Err(KzgError::SrsNotInitialized));
    }

    #[test]
    fn test_commit_capacity_exceeded() {
        let poly = random_poly(TEST_SETUP_SIZE + 1);
        assert_eq!(
            KZG_INSTANCE.commit(&poly),
            Err(KzgError::SrsCapacityExceeded {
                polynomial_len: 2 * TEST_SETUP_SIZE,
                srs_len: TEST_SETUP_SIZE,
            })
        );
    }

    #[test]
    fn test_setup_requires_power_of_two() {
        let mut kzg = UnivariateKzg::new();
        assert_eq!(
            kzg.setup_with_secret(100, &Fr::from(7u64)),
            Err(KzgError::FFTError(
                "SRS order must be a nonzero power of 2".to_string()
            ))
        );
    }

    #[test]
    fn test_setup_rejects_zero_secret() {
        let mut kzg = UnivariateKzg::new();
        assert!(kzg.setup_with_secret(16, &Fr::from(0u64)).is_err());
    }

    #[test]
    fn test_deterministic_setup_reproducible() {
        let mut kzg_a = UnivariateKzg::new();
        let mut kzg_b = UnivariateKzg::new();
        kzg_a.setup_with_secret(32, &Fr::from(98765u64)).unwrap();
        kzg_b.setup_with_secret(32, &Fr::from(98765u64)).unwrap();
        assert_eq!(kzg_a.srs().unwrap(), kzg_b.srs().unwrap());

        let poly = random_poly(16);
        assert_eq!(kzg_a.commit(&poly).unwrap(), kzg_b.commit(&poly).unwrap());

        let mut kzg_c = UnivariateKzg::new();
        kzg_c.setup_with_secret(32, &Fr::from(11111u64)).unwrap();
        assert_ne!(kzg_a.commit(&poly).unwrap(), kzg_c.commit(&poly).unwrap());
    }

    #[test]
    fn test_commit_forms_agree() {
        // Committing a polynomial in coefficient form against the monomial
        // key and its evaluation form against the Lagrange key must yield
        // the same group element.
        let poly = random_poly(TEST_SETUP_SIZE);
        let eval_form = poly.to_eval_form().unwrap();

        let coeff_commitment = KZG_INSTANCE.commit(&poly).unwrap();
        let eval_commitment = KZG_INSTANCE.commit_lagrange(&eval_form).unwrap();
        assert_eq!(coeff_commitment, eval_commitment);
    }

    #[test]
    fn test_commit_forms_agree_on_subdomain() {
        // Shorter evaluation-form inputs use an on-demand Lagrange basis.
        let poly = random_poly(16);
        let eval_form = poly.to_eval_form().unwrap();

        let coeff_commitment = KZG_INSTANCE.commit(&poly).unwrap();
        let eval_commitment = KZG_INSTANCE.commit_lagrange(&eval_form).unwrap();
        assert_eq!(coeff_commitment, eval_commitment);
    }

    #[test]
    fn test_extended_capacity_bounds() {
        let mut kzg = UnivariateKzg::with_extended_capacity(4 * TEST_SETUP_SIZE);
        kzg.setup_with_secret(TEST_SETUP_SIZE, &Fr::from(777u64))
            .unwrap();
        assert_eq!(kzg.domain_size().unwrap(), TEST_SETUP_SIZE);
        assert_eq!(kzg.max_committed_size().unwrap(), 4 * TEST_SETUP_SIZE);

        // Above the base bound but within the extended capacity.
        let extended_poly = random_poly(2 * TEST_SETUP_SIZE);
        assert!(kzg.commit(&extended_poly).is_ok());

        // Beyond the extended capacity.
        let oversized = random_poly(4 * TEST_SETUP_SIZE + 1);
        assert_eq!(
            kzg.commit(&oversized),
            Err(KzgError::SrsCapacityExceeded {
                polynomial_len: 8 * TEST_SETUP_SIZE,
                srs_len: 4 * TEST_SETUP_SIZE,
            })
        );
    }

    #[test]
    fn test_extended_engine_matches_base_engine_on_base_polys() {
        let mut base = UnivariateKzg::new();
        let mut extended = UnivariateKzg::with_extended_capacity(128);
        base.setup_with_secret(32, &Fr::from(5555u64)).unwrap();
        extended.setup_with_secret(32, &Fr::from(5555u64)).unwrap();

        let poly = random_poly(32);
        assert_eq!(base.commit(&poly).unwrap(), extended.commit(&poly).unwrap());
    }

    #[test]
    fn test_srs_g2_points_derived_from_secret() {
        let tau = Fr::from(424242u64);
        let srs = KZG_INSTANCE.srs().unwrap();
        assert_eq!(srs.g2, G2Affine::generator());
        assert_eq!(srs.g2_tau, (G2Affine::generator() * tau).into_affine());
    }

    #[test]
    fn test_setup_replaces_srs() {
        let mut kzg = UnivariateKzg::new();
        kzg.setup_with_secret(16, &Fr::from(1u64)).unwrap();
        let poly = random_poly(8);
        let before = kzg.commit(&poly).unwrap();

        kzg.setup_with_secret(16, &Fr::from(2u64)).unwrap();
        let after = kzg.commit(&poly).unwrap();
        assert_ne!(before, after);
    }
}
