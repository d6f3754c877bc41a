use thiserror::Error;

/// Errors related to Polynomial operations.
///
/// The `PolynomialError` enum encapsulates all possible errors that can occur
/// during operations on the polynomial structs, such as FFT transformations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// Error related to Fast Fourier Transform (FFT) operations with a descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// commitment, batch scheduling and opening-proof operations. Configuration
/// errors (capacity exceeded, uninitialized SRS, batch lifecycle misuse) and
/// malformed-input errors (inconsistent opening claims) are both surfaced
/// through this type; a cryptographically invalid but well-formed proof is
/// *not* an error and is reported as a plain `Ok(false)` by the verifier.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Error when polynomial length exceeds the commitment capacity of the SRS.
    #[error("polynomial length {polynomial_len} exceeds SRS capacity {srs_len}")]
    SrsCapacityExceeded {
        polynomial_len: usize,
        srs_len: usize,
    },

    /// A commitment or opening operation was attempted before `setup` ran.
    #[error("SRS has not been initialized; call setup first")]
    SrsNotInitialized,

    /// `set_batch_mode` was called while a previous batch is still pending.
    #[error("a previous batch of {pending} pending commitments has not been finalized")]
    BatchInProgress { pending: usize },

    /// A batched commit was attempted outside of batch mode.
    #[error("batch mode is not active")]
    BatchModeNotActive,

    /// A batched commit referenced a slot outside the declared batch count.
    #[error("batch slot index {index} out of range for batch of {batch_count}")]
    BatchIndexOutOfRange { index: usize, batch_count: usize },

    /// `get_batch_commitments` was called before every slot was filled.
    #[error("incomplete batch: {filled} of {batch_count} slots filled")]
    IncompleteBatch { filled: usize, batch_count: usize },

    /// A claimed evaluation does not match the polynomial at the stated point.
    /// This indicates prover misuse, not a protocol fault.
    #[error("invalid opening claim: {0}")]
    InvalidOpeningClaim(String),

    /// A rotation set contains the same evaluation point twice.
    #[error("duplicate evaluation point in rotation set")]
    DuplicateEvaluationPoint,

    /// Error related to commitment processes with a descriptive message.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Error indicating an invalid commit operation with a descriptive message.
    #[error("commit error: {0}")]
    CommitError(String),

    /// Error related to Fast Fourier Transform (FFT) operations with a descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),

    /// Error indicating an invalid input length scenario, typically in data processing.
    #[error("invalid input length")]
    InvalidInputLength,
}
