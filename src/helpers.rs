use ark_bn254::{Bn254, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, PrimeField};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use ark_std::{One, Zero};
use sha2::{Digest, Sha256};

use crate::errors::KzgError;

/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
///
/// # Arguments
/// * `base` - The field element to compute powers of
/// * `count` - The number of powers to compute (0 to count-1)
///
/// # Returns
/// * Vector of field elements containing powers: [x⁰, x¹, x², ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// Computes: s₁P₁ + s₂P₂ + ... + sₙPₙ
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Maps a byte slice to a field element (`Fr`) using SHA-256 as the hash
/// function, interpreting the digest as a big-endian integer reduced mod r.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Checks e(a1, a2) == e(b1, b2) via a single multi-pairing against the
/// negated right-hand side.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

/// Validates that a G1 point is on the curve and in the correct subgroup.
/// This prevents invalid curve attacks on verifier inputs.
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError("G1 point not on curve".to_string()));
    }
    Ok(())
}

/// Builds the monic polynomial vanishing at exactly the given points:
/// Z(X) = (X - s₀)(X - s₁)...(X - sₖ₋₁).
pub fn vanishing_polynomial(points: &[Fr]) -> DensePolynomial<Fr> {
    let mut vanishing = DensePolynomial::from_coefficients_vec(vec![Fr::one()]);
    for point in points {
        let linear = DensePolynomial::from_coefficients_vec(vec![-*point, Fr::one()]);
        vanishing = &vanishing * &linear;
    }
    vanishing
}

/// Evaluates the vanishing polynomial of the given points at `x` without
/// materializing its coefficients.
pub fn evaluate_vanishing_polynomial(points: &[Fr], x: &Fr) -> Fr {
    points.iter().fold(Fr::one(), |acc, point| acc * (*x - point))
}

/// Multiplies every coefficient of `poly` by `scalar`.
pub fn scale_polynomial(poly: &DensePolynomial<Fr>, scalar: &Fr) -> DensePolynomial<Fr> {
    DensePolynomial::from_coefficients_vec(poly.coeffs.iter().map(|c| *c * scalar).collect())
}

/// Lagrange-interpolates the unique polynomial of degree < points.len()
/// agreeing with `values` at `points`.
///
/// # Arguments
/// * `points` - Pairwise distinct evaluation points
/// * `values` - Claimed evaluations, aligned with `points`
///
/// # Returns
/// * The interpolated polynomial, or an error when the input lengths differ
///   or an evaluation point is repeated.
pub fn lagrange_interpolate(points: &[Fr], values: &[Fr]) -> Result<DensePolynomial<Fr>, KzgError> {
    if points.len() != values.len() {
        return Err(KzgError::InvalidInputLength);
    }

    let mut interpolation = DensePolynomial::zero();
    for (i, (point_i, value_i)) in points.iter().zip(values.iter()).enumerate() {
        // Numerator: prod_{j != i} (X - s_j); denominator: prod_{j != i} (s_i - s_j)
        let mut basis = DensePolynomial::from_coefficients_vec(vec![Fr::one()]);
        let mut denominator = Fr::one();
        for (j, point_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let linear = DensePolynomial::from_coefficients_vec(vec![-*point_j, Fr::one()]);
            basis = &basis * &linear;
            denominator *= *point_i - point_j;
        }
        let denominator_inv = denominator
            .inverse()
            .ok_or(KzgError::DuplicateEvaluationPoint)?;
        interpolation = &interpolation + &scale_polynomial(&basis, &(*value_i * denominator_inv));
    }

    Ok(interpolation)
}
