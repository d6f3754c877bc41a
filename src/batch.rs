use ark_bn254::Fr;

/// A polynomial input recorded for deferred commitment computation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingCommitment {
    /// Coefficient-form input, combined with the monomial key.
    Coeff(Vec<Fr>),
    /// Evaluation-form input, combined with the Lagrange key.
    Eval(Vec<Fr>),
}

/// Pending inputs of one deferred commitment batch.
///
/// Created empty when batch mode is entered with a declared slot count,
/// filled incrementally by slot index, and consumed exactly once when the
/// commitments are materialized. Retrieval order is slot order, not
/// submission order. Distinct slots may be filled from independent tasks;
/// materialization is the single synchronization point.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchCommitmentState {
    slots: Vec<Option<PendingCommitment>>,
}

impl BatchCommitmentState {
    pub(crate) fn new(batch_count: usize) -> Self {
        Self {
            slots: vec![None; batch_count],
        }
    }

    /// The declared slot count.
    pub fn batch_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a pending input.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Records `pending` at `index`. A slot submitted twice keeps the last
    /// write. Returns false when the index is out of range.
    pub(crate) fn record(&mut self, index: usize, pending: PendingCommitment) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(pending);
                true
            }
            None => false,
        }
    }

    pub(crate) fn slots(&self) -> &[Option<PendingCommitment>] {
        &self.slots
    }
}
