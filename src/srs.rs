use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::{UniformRand, Zero};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::errors::KzgError;
use crate::helpers;

/// Represents the Structured Reference String (SRS) used in KZG commitments.
///
/// The monomial key `g1` holds `[τ⁰]G₁ .. [τ^(n-1)]G₁` and is combined with
/// polynomials in coefficient form. The Lagrange key `g1_lagrange` is the
/// IFFT of the monomial key over the canonical radix-2 domain of size
/// `order` and is combined with polynomials in evaluation form. `g2_tau`
/// carries the single G2 power needed by the pairing check.
///
/// Read-only once generated; safely shared across concurrent commitment and
/// opening operations.
#[derive(Debug, PartialEq, Clone)]
pub struct SRS {
    /// Monomial-form G1 points. The length of this vector is the commitment
    /// capacity in coefficients, which may exceed `order` when an extended
    /// degree capacity was declared.
    pub g1: Vec<G1Affine>,
    /// Lagrange-form G1 points over the canonical domain of size `order`.
    pub g1_lagrange: Vec<G1Affine>,
    /// The G2 generator.
    pub g2: G2Affine,
    /// τ times the G2 generator.
    pub g2_tau: G2Affine,
    /// The canonical evaluation-domain size (a power of two).
    pub order: usize,
}

impl SRS {
    /// Generates an SRS from a freshly drawn random secret. The secret is
    /// dropped as soon as the points are derived.
    ///
    /// # Arguments
    ///
    /// * `num_powers` - Number of monomial G1 points to derive (the
    ///   commitment capacity).
    /// * `order` - The canonical evaluation-domain size; must be a power of
    ///   two no larger than `num_powers`.
    pub fn generate(num_powers: usize, order: usize) -> Result<Self, KzgError> {
        let mut rng = rand::thread_rng();
        let mut tau = Fr::rand(&mut rng);
        while tau.is_zero() {
            tau = Fr::rand(&mut rng);
        }
        Self::generate_with_secret(num_powers, order, &tau)
    }

    /// Deterministic variant of [SRS::generate] for reproducible tests and
    /// cross-implementation vectors: any correct implementation derives the
    /// same SRS for the same secret.
    pub fn generate_with_secret(
        num_powers: usize,
        order: usize,
        tau: &Fr,
    ) -> Result<Self, KzgError> {
        if order == 0 || !order.is_power_of_two() {
            return Err(KzgError::FFTError(
                "SRS order must be a nonzero power of 2".to_string(),
            ));
        }
        if num_powers < order {
            return Err(KzgError::GenericError(
                "number of G1 powers is smaller than the SRS order".to_string(),
            ));
        }
        if tau.is_zero() {
            return Err(KzgError::GenericError(
                "SRS secret must be nonzero".to_string(),
            ));
        }

        let scalars = helpers::compute_powers(tau, num_powers);
        let g1_projective: Vec<G1Projective> = scalars
            .par_iter()
            .map(|power| G1Projective::generator() * power)
            .collect();
        let g1 = G1Projective::normalize_batch(&g1_projective);

        // The Lagrange key for the canonical domain is the IFFT of the
        // monomial key restricted to that domain.
        let g1_lagrange = Self::g1_ifft_points(&g1_projective[..order])?;

        let g2 = G2Affine::generator();
        let g2_tau = (G2Projective::generator() * tau).into_affine();

        Ok(Self {
            g1,
            g1_lagrange,
            g2,
            g2_tau,
            order,
        })
    }

    /// Derives the Lagrange-basis key for a radix-2 subdomain of the given
    /// length by inverse FFT over the monomial key.
    pub fn lagrange_basis(&self, length: usize) -> Result<Vec<G1Affine>, KzgError> {
        if length > self.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: length,
                srs_len: self.g1.len(),
            });
        }
        let points_projective: Vec<G1Projective> = self.g1[..length]
            .par_iter()
            .map(|&p| G1Projective::from(p))
            .collect();
        Self::g1_ifft_points(&points_projective)
    }

    fn g1_ifft_points(points: &[G1Projective]) -> Result<Vec<G1Affine>, KzgError> {
        if !points.len().is_power_of_two() {
            return Err(KzgError::FFTError(
                "length provided is not a power of 2".to_string(),
            ));
        }

        let ifft_result = GeneralEvaluationDomain::<Fr>::new(points.len())
            .ok_or(KzgError::FFTError(
                "Could not perform IFFT due to domain construction error".to_string(),
            ))?
            .ifft(points);
        Ok(G1Projective::normalize_batch(&ifft_result))
    }
}
