pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes

/// Domain separator seeding every transcript built by [crate::transcript::Sha256Transcript::new].
pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"SHPLONK_BN254_FSTRANSCR_V1_";

/// Transcript label under which per-group aggregate quotient commitments are absorbed.
pub const SHPLONK_GROUP_COMMITMENT_LABEL: &[u8] = b"shplonk_group_quotient";
/// Transcript label for the intra-group aggregation challenge.
pub const SHPLONK_CHALLENGE_Y_LABEL: &[u8] = b"shplonk_challenge_y";
/// Transcript label for the cross-group evaluation challenge.
pub const SHPLONK_CHALLENGE_X_LABEL: &[u8] = b"shplonk_challenge_x";
