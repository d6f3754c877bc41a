//! ## Library Design / Architecture
//!
//! This library implements a SHPLONK-style batched polynomial commitment
//! scheme over bn254 for zk proving pipelines: a prover commits to
//! polynomials, later proves their values at one or more evaluation points
//! with a single aggregated proof, and a verifier checks those claims
//! against the commitments alone with one pairing.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > [polynomial::PolynomialCoeffForm]/[polynomial::PolynomialEvalForm] ->
//! > KZG commitment -> opening claims -> SHPLONK opening proof
//!
//! - Polynomial: bn254 field elements array, interpreted as coefficients or
//!   evaluations over the canonical radix-2 domain
//! - SRS: bn254 group elements derived once from a secret, held by
//!   [kzg::UnivariateKzg]; monomial key for coefficient form, Lagrange key
//!   for evaluation form
//! - Opening claims: (polynomial/commitment, point set, claimed values),
//!   organized into disjoint groups by rotation set
//! - Proof: one aggregate quotient commitment per group plus one final
//!   quotient commitment, pairing-checked in a single equation
//!
//! The polynomial structs are mostly plain data with constructors and a few
//! helper methods. The interesting stuff happens in [kzg::UnivariateKzg],
//! which has methods for committing to polynomials in coeff or eval form
//! (immediately or deferred through batch mode, see
//! [kzg::UnivariateKzg::set_batch_mode]) and for generating and verifying
//! aggregated opening proofs (see [shplonk]).
//!
//! ### Batch mode
//!
//! Batch mode is a scheduling seam: commitments scheduled with
//! [kzg::UnivariateKzg::commit_batched] are only materialized by
//! [kzg::UnivariateKzg::get_batch_commitments], which is free to combine
//! the pending MSMs, but the results are observably identical to the
//! immediate path, slot by slot.
//!
//! ### Extended degree
//!
//! An engine built with [kzg::UnivariateKzg::with_extended_capacity]
//! accepts coefficient vectors beyond the canonical domain size, for
//! constraint polynomials evaluated over an enlarged domain; the engine is
//! parameterized by the capacity rather than wrapped in a second type.
//!
//! ### Example
//!
//! ```rust
//! use ark_bn254::Fr;
//! use rust_shplonk_bn254::kzg::UnivariateKzg;
//! use rust_shplonk_bn254::polynomial::PolynomialCoeffForm;
//! use rust_shplonk_bn254::shplonk::{GroupOpening, OpeningGroup};
//! use rust_shplonk_bn254::transcript::Sha256Transcript;
//!
//! let mut kzg = UnivariateKzg::new();
//! kzg.setup_with_secret(16, &Fr::from(1234u64)).unwrap();
//!
//! let poly = PolynomialCoeffForm::new(vec![Fr::from(3u64), Fr::from(7u64)]);
//! let commitment = kzg.commit(&poly).unwrap();
//!
//! let point = Fr::from(5u64);
//! let groups = [OpeningGroup {
//!     points: vec![point],
//!     openings: vec![GroupOpening { poly: &poly, values: vec![poly.evaluate(&point)] }],
//! }];
//! let mut transcript = Sha256Transcript::new(b"example");
//! let proof = kzg.create_opening_proof(&groups, &mut transcript).unwrap();
//! assert_eq!(proof.group_commitments.len(), 1);
//! let _ = commitment;
//! ```

pub mod batch;
pub mod consts;
pub mod errors;
pub mod helpers;
pub mod kzg;
pub mod polynomial;
pub mod shplonk;
pub mod srs;
pub mod transcript;
