use ark_bn254::{Fr, G1Affine};
use ark_ff::BigInteger;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;

use crate::consts::{
    BYTES_PER_FIELD_ELEMENT, FIAT_SHAMIR_PROTOCOL_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
};
use crate::errors::KzgError;
use crate::helpers;

/// Deterministic challenge generator driven by prior proof data.
///
/// The opening-proof prover and verifier both consume a transcript; they
/// derive identical challenges exactly when the transcript was driven with
/// the same public inputs on both sides. Implementations must be
/// deterministic: the engine injects no randomness of its own.
pub trait Transcript {
    /// Absorbs a group element under a label.
    fn append_point(&mut self, label: &[u8], point: &G1Affine) -> Result<(), KzgError>;

    /// Absorbs a field element under a label.
    fn append_scalar(&mut self, label: &[u8], scalar: &Fr);

    /// Derives the next challenge under a label. The challenge is absorbed
    /// back into the transcript so later challenges depend on it.
    fn challenge_scalar(&mut self, label: &[u8]) -> Fr;
}

/// SHA-256 based transcript: every absorbed item is appended to a running
/// buffer behind a protocol domain separator, and challenges are produced by
/// hashing the buffer to a field element.
#[derive(Debug, Clone)]
pub struct Sha256Transcript {
    buffer: Vec<u8>,
}

impl Sha256Transcript {
    /// Creates a transcript seeded with the protocol domain separator and a
    /// caller-chosen initial label (typically naming the surrounding proof).
    pub fn new(label: &[u8]) -> Self {
        let mut buffer = Vec::with_capacity(FIAT_SHAMIR_PROTOCOL_DOMAIN.len() + label.len());
        buffer.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
        buffer.extend_from_slice(label);
        Self { buffer }
    }
}

impl Transcript for Sha256Transcript {
    fn append_point(&mut self, label: &[u8], point: &G1Affine) -> Result<(), KzgError> {
        let mut bytes = Vec::with_capacity(SIZE_OF_G1_AFFINE_COMPRESSED);
        point
            .serialize_compressed(&mut bytes)
            .map_err(|_| KzgError::SerializationError("Failed to serialize point".to_string()))?;
        self.buffer.extend_from_slice(label);
        self.buffer.extend_from_slice(&bytes);
        Ok(())
    }

    fn append_scalar(&mut self, label: &[u8], scalar: &Fr) {
        self.buffer
            .reserve(label.len() + BYTES_PER_FIELD_ELEMENT);
        self.buffer.extend_from_slice(label);
        self.buffer
            .extend_from_slice(&scalar.into_bigint().to_bytes_be());
    }

    fn challenge_scalar(&mut self, label: &[u8]) -> Fr {
        self.buffer.extend_from_slice(label);
        let challenge = helpers::hash_to_field_element(&self.buffer);
        // Chain the challenge so the next one depends on it.
        self.buffer
            .extend_from_slice(&challenge.into_bigint().to_bytes_be());
        challenge
    }
}
