use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::batch::{BatchCommitmentState, PendingCommitment};
use crate::errors::KzgError;
use crate::polynomial::{PolynomialCoeffForm, PolynomialEvalForm};
use crate::srs::SRS;

/// Main interesting struct of the rust-shplonk-bn254 crate.
///
/// [UnivariateKzg] owns the SRS and provides methods for committing to
/// polynomials in coefficient or evaluation form (immediately, or deferred
/// through batch mode), and for creating and verifying SHPLONK batched
/// opening proofs (see [crate::shplonk]).
///
/// The base scheme and its degree-extended variant are one engine that
/// differs only in declared capacity: an engine built with
/// [UnivariateKzg::with_extended_capacity] derives enough monomial key
/// material at setup to commit coefficient vectors up to the extended
/// capacity, while the canonical evaluation domain stays at the setup size.
#[derive(Debug, PartialEq, Clone)]
pub struct UnivariateKzg {
    extended_size: Option<usize>,
    srs: Option<SRS>,
    batch: Option<BatchCommitmentState>,
}

impl Default for UnivariateKzg {
    fn default() -> Self {
        Self::new()
    }
}

impl UnivariateKzg {
    pub fn new() -> Self {
        Self {
            extended_size: None,
            srs: None,
            batch: None,
        }
    }

    /// Creates an engine whose declared commitment capacity is
    /// `extended_size` coefficients, independent of the canonical domain
    /// size passed to [UnivariateKzg::setup]. Needed when constraint
    /// polynomials are evaluated over an enlarged domain.
    pub fn with_extended_capacity(extended_size: usize) -> Self {
        Self {
            extended_size: Some(extended_size),
            srs: None,
            batch: None,
        }
    }

    /// Generates the SRS for a canonical domain of `size` (a power of two)
    /// from a freshly drawn random secret.
    ///
    /// Calling setup again replaces the SRS and invalidates commitments
    /// computed against the old one; the engine does not version
    /// commitments against SRS instances. Any pending batch is dropped.
    pub fn setup(&mut self, size: usize) -> Result<(), KzgError> {
        let srs = SRS::generate(self.num_powers(size), size)?;
        self.srs = Some(srs);
        self.batch = None;
        Ok(())
    }

    /// Deterministic variant of [UnivariateKzg::setup] taking an explicit
    /// secret, for reproducible tests and cross-implementation vectors.
    pub fn setup_with_secret(&mut self, size: usize, tau: &Fr) -> Result<(), KzgError> {
        let srs = SRS::generate_with_secret(self.num_powers(size), size, tau)?;
        self.srs = Some(srs);
        self.batch = None;
        Ok(())
    }

    fn num_powers(&self, size: usize) -> usize {
        match self.extended_size {
            Some(extended_size) => extended_size.max(size),
            None => size,
        }
    }

    pub fn srs(&self) -> Result<&SRS, KzgError> {
        self.srs.as_ref().ok_or(KzgError::SrsNotInitialized)
    }

    /// The canonical evaluation-domain size.
    pub fn domain_size(&self) -> Result<usize, KzgError> {
        Ok(self.srs()?.order)
    }

    /// The commitment capacity in coefficients: the extended capacity when
    /// one was declared, the canonical domain size otherwise.
    pub fn max_committed_size(&self) -> Result<usize, KzgError> {
        Ok(self.srs()?.g1.len())
    }

    /// Commits to a coefficient-form polynomial with a single MSM against
    /// the monomial key. Pure over (SRS, input).
    pub fn commit(&self, polynomial: &PolynomialCoeffForm) -> Result<G1Affine, KzgError> {
        let srs = self.srs()?;
        Self::commit_coeffs(srs, polynomial.coeffs())
    }

    /// Commits to an evaluation-form polynomial against the Lagrange key.
    /// Inputs over the canonical domain use the precomputed key; shorter
    /// power-of-two inputs use a key derived on demand.
    pub fn commit_lagrange(&self, polynomial: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        let srs = self.srs()?;
        Self::commit_evals(srs, polynomial.evaluations())
    }

    pub(crate) fn commit_coeffs(srs: &SRS, coeffs: &[Fr]) -> Result<G1Affine, KzgError> {
        if coeffs.len() > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: coeffs.len(),
                srs_len: srs.g1.len(),
            });
        }
        let bases = &srs.g1[..coeffs.len()];

        match G1Projective::msm(bases, coeffs) {
            Ok(res) => Ok(res.into_affine()),
            Err(err) => Err(KzgError::CommitError(err.to_string())),
        }
    }

    pub(crate) fn commit_evals(srs: &SRS, evals: &[Fr]) -> Result<G1Affine, KzgError> {
        if evals.len() > srs.g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: evals.len(),
                srs_len: srs.g1.len(),
            });
        }

        let result = if evals.len() == srs.g1_lagrange.len() {
            G1Projective::msm(&srs.g1_lagrange, evals)
        } else {
            let bases = srs.lagrange_basis(evals.len())?;
            G1Projective::msm(&bases, evals)
        };

        match result {
            Ok(res) => Ok(res.into_affine()),
            Err(err) => Err(KzgError::CommitError(err.to_string())),
        }
    }

    /// Transitions the engine into batch mode with `batch_count` pending
    /// slots. Fails if a previous batch has not been finalized.
    pub fn set_batch_mode(&mut self, batch_count: usize) -> Result<(), KzgError> {
        self.srs()?;
        if let Some(state) = &self.batch {
            return Err(KzgError::BatchInProgress {
                pending: state.batch_count(),
            });
        }
        self.batch = Some(BatchCommitmentState::new(batch_count));
        Ok(())
    }

    pub fn batch_mode(&self) -> bool {
        self.batch.is_some()
    }

    /// Read access to the pending batch, if batch mode is active.
    pub fn batch_commitment_state(&self) -> Option<&BatchCommitmentState> {
        self.batch.as_ref()
    }

    /// Batch-mode variant of [UnivariateKzg::commit]: records the
    /// polynomial at `index` instead of performing the MSM. Bounds are
    /// checked at submission so failures surface where the immediate path
    /// would fail.
    pub fn commit_batched(
        &mut self,
        polynomial: &PolynomialCoeffForm,
        index: usize,
    ) -> Result<(), KzgError> {
        let capacity = self.max_committed_size()?;
        if polynomial.len() > capacity {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: polynomial.len(),
                srs_len: capacity,
            });
        }
        self.record_pending(index, PendingCommitment::Coeff(polynomial.coeffs().to_vec()))
    }

    /// Batch-mode variant of [UnivariateKzg::commit_lagrange].
    pub fn commit_lagrange_batched(
        &mut self,
        polynomial: &PolynomialEvalForm,
        index: usize,
    ) -> Result<(), KzgError> {
        let capacity = self.max_committed_size()?;
        if polynomial.len() > capacity {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: polynomial.len(),
                srs_len: capacity,
            });
        }
        self.record_pending(
            index,
            PendingCommitment::Eval(polynomial.evaluations().to_vec()),
        )
    }

    fn record_pending(&mut self, index: usize, pending: PendingCommitment) -> Result<(), KzgError> {
        let state = self.batch.as_mut().ok_or(KzgError::BatchModeNotActive)?;
        let batch_count = state.batch_count();
        if !state.record(index, pending) {
            return Err(KzgError::BatchIndexOutOfRange { index, batch_count });
        }
        Ok(())
    }

    /// Materializes every pending entry of the current batch and exits
    /// batch mode. This is the only point at which batched inputs touch the
    /// SRS; the results are identical, slot by slot, to committing each
    /// input through the immediate path.
    ///
    /// Fails with [KzgError::IncompleteBatch] while any slot is empty; the
    /// pending state is kept in that case so remaining slots can still be
    /// filled.
    pub fn get_batch_commitments(&mut self) -> Result<Vec<G1Affine>, KzgError> {
        self.srs()?;
        let state = self.batch.as_ref().ok_or(KzgError::BatchModeNotActive)?;
        if !state.is_complete() {
            return Err(KzgError::IncompleteBatch {
                filled: state.filled(),
                batch_count: state.batch_count(),
            });
        }

        // Consume the state; retrieval happens exactly once.
        let state = self.batch.take().ok_or(KzgError::BatchModeNotActive)?;
        let srs = self.srs()?;

        state
            .slots()
            .par_iter()
            .map(|slot| match slot {
                Some(PendingCommitment::Coeff(coeffs)) => Self::commit_coeffs(srs, coeffs),
                Some(PendingCommitment::Eval(evals)) => Self::commit_evals(srs, evals),
                None => Err(KzgError::GenericError(
                    "empty slot in complete batch".to_string(),
                )),
            })
            .collect()
    }
}
