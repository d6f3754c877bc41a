//! SHPLONK batched opening proofs.
//!
//! Opening claims are organized by the caller into disjoint groups, one per
//! rotation set (the set of distinct evaluation points shared by the group's
//! polynomials). The prover aggregates all quotients of a group under a
//! challenge `y`, commits to each aggregate, then combines the groups under
//! a challenge `x` into one final quotient, so the proof holds one G1 point
//! per group plus one final point regardless of how many polynomials each
//! group opens. The verifier reassembles the same linear combination over
//! commitments with a single MSM and checks one pairing equation.

use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_poly::{
    univariate::{DenseOrSparsePolynomial, DensePolynomial},
    DenseUVPolynomial, Polynomial,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{One, Zero};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::consts::{
    SHPLONK_CHALLENGE_X_LABEL, SHPLONK_CHALLENGE_Y_LABEL, SHPLONK_GROUP_COMMITMENT_LABEL,
};
use crate::errors::KzgError;
use crate::helpers;
use crate::kzg::UnivariateKzg;
use crate::polynomial::PolynomialCoeffForm;
use crate::transcript::Transcript;

/// One polynomial of an opening group together with its claimed evaluations,
/// aligned with the group's point set.
#[derive(Clone, Debug)]
pub struct GroupOpening<'a> {
    pub poly: &'a PolynomialCoeffForm,
    pub values: Vec<Fr>,
}

/// Prover-side opening claims for one rotation set: every polynomial in
/// `openings` is claimed at every point in `points`.
#[derive(Clone, Debug)]
pub struct OpeningGroup<'a> {
    pub points: Vec<Fr>,
    pub openings: Vec<GroupOpening<'a>>,
}

/// Verifier-side counterpart of [GroupOpening]: the commitment stands in for
/// the polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct CommitmentClaim {
    pub commitment: G1Affine,
    pub values: Vec<Fr>,
}

/// Verifier-side opening claims for one rotation set.
#[derive(Clone, Debug, PartialEq)]
pub struct CommitmentGroup {
    pub points: Vec<Fr>,
    pub claims: Vec<CommitmentClaim>,
}

/// A SHPLONK batched opening proof.
///
/// Field order is a compatibility invariant any serializer must preserve:
/// the per-group aggregate quotient commitments in group order, then the
/// final quotient commitment.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct OpeningProof {
    pub group_commitments: Vec<G1Affine>,
    pub final_commitment: G1Affine,
}

/// Per-group intermediates produced by the map phase of the prover.
struct GroupAggregate {
    vanishing: DensePolynomial<Fr>,
    aggregate: DensePolynomial<Fr>,
    interpolations: Vec<DensePolynomial<Fr>>,
}

impl UnivariateKzg {
    /// Creates one aggregated opening proof for an ordered collection of
    /// claim groups.
    ///
    /// The caller must have driven `transcript` with the public inputs of
    /// the surrounding proof; given identical inputs and transcript state
    /// the proof is bit-identical.
    ///
    /// # Errors
    /// * [KzgError::InvalidInputLength] - empty groups or claimed values not
    ///   aligned with the group's points.
    /// * [KzgError::InvalidOpeningClaim] - a claimed evaluation does not
    ///   match the polynomial at the stated point (prover misuse).
    /// * [KzgError::SrsCapacityExceeded] / [KzgError::SrsNotInitialized] -
    ///   configuration errors from the commitment engine.
    pub fn create_opening_proof<T: Transcript>(
        &self,
        groups: &[OpeningGroup<'_>],
        transcript: &mut T,
    ) -> Result<OpeningProof, KzgError> {
        let srs = self.srs()?;
        validate_prover_groups(groups)?;

        let y = transcript.challenge_scalar(SHPLONK_CHALLENGE_Y_LABEL);

        // Map phase: each group's quotienting is a pure function of the
        // group and y, so groups are processed in parallel.
        let aggregates: Vec<GroupAggregate> = groups
            .par_iter()
            .map(|group| aggregate_group(group, &y))
            .collect::<Result<_, _>>()?;

        let mut group_commitments = Vec::with_capacity(groups.len());
        for aggregate in &aggregates {
            let commitment = Self::commit_coeffs(srs, &aggregate.aggregate.coeffs)?;
            transcript.append_point(SHPLONK_GROUP_COMMITMENT_LABEL, &commitment)?;
            group_commitments.push(commitment);
        }

        let x = transcript.challenge_scalar(SHPLONK_CHALLENGE_X_LABEL);

        // Reduce phase: combine the groups into the final polynomial
        //   l(X) = sum_j x^j (sum_i y^i (f_ji(X) - r_ji(x)) - z_j(x) h_j(X))
        // which vanishes at x by construction of the h_j.
        let x_powers = helpers::compute_powers(&x, groups.len());
        let mut combined = DensePolynomial::zero();
        for ((group, aggregate), x_j) in groups.iter().zip(&aggregates).zip(&x_powers) {
            let z_at_x = aggregate.vanishing.evaluate(&x);
            let y_powers = helpers::compute_powers(&y, group.openings.len());

            let mut group_part = DensePolynomial::zero();
            let mut claimed_at_x = Fr::zero();
            for ((opening, interpolation), y_i) in group
                .openings
                .iter()
                .zip(&aggregate.interpolations)
                .zip(&y_powers)
            {
                let f = DensePolynomial::from_coefficients_slice(opening.poly.coeffs());
                group_part = &group_part + &helpers::scale_polynomial(&f, y_i);
                claimed_at_x += *y_i * interpolation.evaluate(&x);
            }
            group_part = &group_part
                - &DensePolynomial::from_coefficients_vec(vec![claimed_at_x]);
            group_part = &group_part - &helpers::scale_polynomial(&aggregate.aggregate, &z_at_x);

            combined = &combined + &helpers::scale_polynomial(&group_part, x_j);
        }

        let final_quotient = divide_by_linear(&combined, &x)?;
        let final_commitment = Self::commit_coeffs(srs, &final_quotient.coeffs)?;

        Ok(OpeningProof {
            group_commitments,
            final_commitment,
        })
    }

    /// Verifies an aggregated opening proof against commitments and claimed
    /// evaluations.
    ///
    /// The transcript must be driven with the same public inputs the prover
    /// used, or verification diverges and fails at the final check. Returns
    /// `Ok(false)` for any structurally or cryptographically invalid proof;
    /// structural defects (wrong element count, misaligned claims) are
    /// rejected before the pairing is attempted. Never partially accepts.
    pub fn verify_opening_proof<T: Transcript>(
        &self,
        groups: &[CommitmentGroup],
        proof: &OpeningProof,
        transcript: &mut T,
    ) -> Result<bool, KzgError> {
        let srs = self.srs()?;

        // Fail closed on malformed shapes before any group arithmetic.
        if groups.is_empty() || proof.group_commitments.len() != groups.len() {
            return Ok(false);
        }
        for group in groups {
            if group.points.is_empty() || group.claims.is_empty() {
                return Ok(false);
            }
            if group
                .claims
                .iter()
                .any(|claim| claim.values.len() != group.points.len())
            {
                return Ok(false);
            }
        }

        for group in groups {
            for claim in &group.claims {
                helpers::validate_g1_point(&claim.commitment)?;
            }
        }
        for commitment in &proof.group_commitments {
            helpers::validate_g1_point(commitment)?;
        }
        helpers::validate_g1_point(&proof.final_commitment)?;

        let y = transcript.challenge_scalar(SHPLONK_CHALLENGE_Y_LABEL);
        for commitment in &proof.group_commitments {
            transcript.append_point(SHPLONK_GROUP_COMMITMENT_LABEL, commitment)?;
        }
        let x = transcript.challenge_scalar(SHPLONK_CHALLENGE_X_LABEL);

        // Assemble the commitment to l(X) in the exponent with one MSM:
        //   L = sum_j x^j (sum_i y^i C_ji - z_j(x) D_j) - e0 G1
        // where e0 replays the claimed evaluations at x.
        let x_powers = helpers::compute_powers(&x, groups.len());
        let mut points = Vec::new();
        let mut scalars = Vec::new();
        let mut claimed_at_x = Fr::zero();
        for ((group, group_commitment), x_j) in groups
            .iter()
            .zip(&proof.group_commitments)
            .zip(&x_powers)
        {
            let z_at_x = helpers::evaluate_vanishing_polynomial(&group.points, &x);
            let y_powers = helpers::compute_powers(&y, group.claims.len());
            for (claim, y_i) in group.claims.iter().zip(&y_powers) {
                points.push(claim.commitment);
                scalars.push(*x_j * y_i);
                let interpolation = helpers::lagrange_interpolate(&group.points, &claim.values)?;
                claimed_at_x += *x_j * y_i * interpolation.evaluate(&x);
            }
            points.push(*group_commitment);
            scalars.push(-(*x_j * z_at_x));
        }
        points.push(G1Affine::generator());
        scalars.push(-claimed_at_x);

        let combined_commitment = helpers::g1_lincomb(&points, &scalars)?;

        // l(X) = q(X)(X - x), so e(L, G2) must equal e(W, (tau - x) G2).
        let x_g2 = (G2Affine::generator() * x).into_affine();
        let tau_minus_x = (srs.g2_tau - x_g2).into_affine();

        Ok(helpers::pairings_verify(
            combined_commitment,
            srs.g2,
            proof.final_commitment,
            tau_minus_x,
        ))
    }
}

fn validate_prover_groups(groups: &[OpeningGroup<'_>]) -> Result<(), KzgError> {
    if groups.is_empty() {
        return Err(KzgError::InvalidInputLength);
    }
    for group in groups {
        if group.points.is_empty() || group.openings.is_empty() {
            return Err(KzgError::InvalidInputLength);
        }
        if group
            .openings
            .iter()
            .any(|opening| opening.values.len() != group.points.len())
        {
            return Err(KzgError::InvalidInputLength);
        }
        // Rotation sets are small, so the quadratic scan is fine.
        for (i, point) in group.points.iter().enumerate() {
            if group.points[..i].contains(point) {
                return Err(KzgError::DuplicateEvaluationPoint);
            }
        }
    }
    Ok(())
}

/// Computes one group's vanishing polynomial, claimed-value interpolations
/// and y-aggregated quotient h_j = sum_i y^i (f_i - r_i) / z_j.
fn aggregate_group(group: &OpeningGroup<'_>, y: &Fr) -> Result<GroupAggregate, KzgError> {
    let vanishing = helpers::vanishing_polynomial(&group.points);
    let y_powers = helpers::compute_powers(y, group.openings.len());

    let mut aggregate = DensePolynomial::zero();
    let mut interpolations = Vec::with_capacity(group.openings.len());
    for (opening, y_i) in group.openings.iter().zip(&y_powers) {
        let interpolation = helpers::lagrange_interpolate(&group.points, &opening.values)?;
        let f = DensePolynomial::from_coefficients_slice(opening.poly.coeffs());
        let numerator = &f - &interpolation;

        // The division is exact iff the claimed evaluations match the
        // polynomial at every point of the rotation set.
        let (quotient, remainder) = DenseOrSparsePolynomial::from(&numerator)
            .divide_with_q_and_r(&DenseOrSparsePolynomial::from(&vanishing))
            .ok_or_else(|| {
                KzgError::GenericError("division by empty vanishing polynomial".to_string())
            })?;
        if !remainder.is_zero() {
            return Err(KzgError::InvalidOpeningClaim(
                "claimed evaluation does not match the polynomial at the stated points"
                    .to_string(),
            ));
        }

        aggregate = &aggregate + &helpers::scale_polynomial(&quotient, y_i);
        interpolations.push(interpolation);
    }

    Ok(GroupAggregate {
        vanishing,
        aggregate,
        interpolations,
    })
}

/// Exact division by (X - x). The dividend must vanish at x.
fn divide_by_linear(poly: &DensePolynomial<Fr>, x: &Fr) -> Result<DensePolynomial<Fr>, KzgError> {
    let divisor = DensePolynomial::from_coefficients_vec(vec![-*x, Fr::one()]);
    let (quotient, remainder) = DenseOrSparsePolynomial::from(poly)
        .divide_with_q_and_r(&DenseOrSparsePolynomial::from(&divisor))
        .ok_or_else(|| KzgError::GenericError("division by zero polynomial".to_string()))?;
    if !remainder.is_zero() {
        return Err(KzgError::GenericError(
            "final combined polynomial does not vanish at the evaluation challenge".to_string(),
        ));
    }
    Ok(quotient)
}
