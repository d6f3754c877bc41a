#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G1Affine};
    use ark_std::UniformRand;
    use rust_shplonk_bn254::errors::KzgError;
    use rust_shplonk_bn254::kzg::UnivariateKzg;
    use rust_shplonk_bn254::polynomial::{PolynomialCoeffForm, PolynomialEvalForm};

    fn test_engine() -> UnivariateKzg {
        let mut kzg = UnivariateKzg::new();
        kzg.setup_with_secret(32, &Fr::from(31337u64)).unwrap();
        kzg
    }

    fn random_poly(len: usize) -> PolynomialCoeffForm {
        let mut rng = rand::thread_rng();
        PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
    }

    #[test]
    fn test_batched_commitments_match_immediate_path() {
        let mut kzg = test_engine();
        let polys: Vec<PolynomialCoeffForm> = (0..4).map(|_| random_poly(32)).collect();

        let expected: Vec<G1Affine> = polys.iter().map(|p| kzg.commit(p).unwrap()).collect();

        kzg.set_batch_mode(4).unwrap();
        // Submit out of index order; retrieval order must be index order.
        for index in [2usize, 0, 3, 1] {
            kzg.commit_batched(&polys[index], index).unwrap();
        }
        let batched = kzg.get_batch_commitments().unwrap();

        assert_eq!(batched, expected);
        assert!(!kzg.batch_mode());
    }

    #[test]
    fn test_batched_lagrange_commitments_match_immediate_path() {
        let mut kzg = test_engine();
        let polys: Vec<PolynomialEvalForm> = (0..3)
            .map(|_| random_poly(32).to_eval_form().unwrap())
            .collect();

        let expected: Vec<G1Affine> = polys
            .iter()
            .map(|p| kzg.commit_lagrange(p).unwrap())
            .collect();

        kzg.set_batch_mode(3).unwrap();
        for (index, poly) in polys.iter().enumerate() {
            kzg.commit_lagrange_batched(poly, index).unwrap();
        }
        assert_eq!(kzg.get_batch_commitments().unwrap(), expected);
    }

    #[test]
    fn test_mixed_forms_in_one_batch() {
        let mut kzg = test_engine();
        let coeff_poly = random_poly(32);
        let eval_poly = coeff_poly.to_eval_form().unwrap();

        kzg.set_batch_mode(2).unwrap();
        kzg.commit_batched(&coeff_poly, 0).unwrap();
        kzg.commit_lagrange_batched(&eval_poly, 1).unwrap();
        let commitments = kzg.get_batch_commitments().unwrap();

        // Both forms commit the same polynomial.
        assert_eq!(commitments[0], commitments[1]);
    }

    #[test]
    fn test_incomplete_batch_errors_and_is_retryable() {
        let mut kzg = test_engine();
        let polys: Vec<PolynomialCoeffForm> = (0..3).map(|_| random_poly(16)).collect();

        kzg.set_batch_mode(3).unwrap();
        kzg.commit_batched(&polys[0], 0).unwrap();
        kzg.commit_batched(&polys[2], 2).unwrap();

        assert_eq!(
            kzg.get_batch_commitments(),
            Err(KzgError::IncompleteBatch {
                filled: 2,
                batch_count: 3,
            })
        );

        // The pending state survives a failed retrieval.
        assert!(kzg.batch_mode());
        kzg.commit_batched(&polys[1], 1).unwrap();
        let batched = kzg.get_batch_commitments().unwrap();
        assert_eq!(batched.len(), 3);
        assert_eq!(batched[1], kzg.commit(&polys[1]).unwrap());
    }

    #[test]
    fn test_set_batch_mode_twice_errors() {
        let mut kzg = test_engine();
        kzg.set_batch_mode(2).unwrap();
        assert_eq!(
            kzg.set_batch_mode(5),
            Err(KzgError::BatchInProgress { pending: 2 })
        );

        // Finalizing the batch re-enables batch mode entry.
        kzg.commit_batched(&random_poly(8), 0).unwrap();
        kzg.commit_batched(&random_poly(8), 1).unwrap();
        kzg.get_batch_commitments().unwrap();
        assert!(kzg.set_batch_mode(5).is_ok());
    }

    #[test]
    fn test_batched_commit_outside_batch_mode_errors() {
        let mut kzg = test_engine();
        assert_eq!(
            kzg.commit_batched(&random_poly(8), 0),
            Err(KzgError::BatchModeNotActive)
        );
    }

    #[test]
    fn test_batched_commit_index_out_of_range() {
        let mut kzg = test_engine();
        kzg.set_batch_mode(2).unwrap();
        assert_eq!(
            kzg.commit_batched(&random_poly(8), 2),
            Err(KzgError::BatchIndexOutOfRange {
                index: 2,
                batch_count: 2,
            })
        );
    }

    #[test]
    fn test_batched_commit_capacity_checked_at_submission() {
        let mut kzg = test_engine();
        kzg.set_batch_mode(1).unwrap();
        assert_eq!(
            kzg.commit_batched(&random_poly(33), 0),
            Err(KzgError::SrsCapacityExceeded {
                polynomial_len: 64,
                srs_len: 32,
            })
        );
    }

    #[test]
    fn test_empty_batch_finalizes_immediately() {
        let mut kzg = test_engine();
        kzg.set_batch_mode(0).unwrap();
        assert_eq!(kzg.get_batch_commitments().unwrap(), Vec::<G1Affine>::new());
        assert!(!kzg.batch_mode());
    }
}
