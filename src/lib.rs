#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! secp256k1 ECVRF proof verification.
//!
//! This crate verifies VRF proofs produced off-path by a prover holding the
//! secret key. It offers two algebraically equivalent paths:
//!
//! * [`verify()`] recomputes the verification points with generic scalar
//!   multiplication. This is the reference semantics.
//! * [`fast_verify()`] consumes a precomputed [`Witness`] bundle from
//!   [`compute_fast_verify_params()`] and replaces both generic scalar
//!   multiplications with signature-recovery checks, which is the profitable
//!   exchange in environments where recovery is a cheap native primitive and
//!   generic point arithmetic is metered.
//!
//! Fixed cryptographic choices:
//! - Curve: secp256k1
//! - Hash-to-curve: SHA-256 try-and-increment, even-y root
//! - Challenge: SHA-256 over compressed points, truncated to 128 bits
//! - Recovery identity: low 20 bytes of Keccak-256(x || y)
//! - Proof wire format: compressed Gamma (33) || c (16) || s (32)

// Core modules
pub mod types;
pub mod errors;
pub mod domain;
pub mod curve;
pub mod ser;
pub mod hash_to_curve;
pub mod challenge;
pub mod recovery;
pub mod verify;
pub mod prover;

// Re-export commonly used types and functions
pub use types::{EncodedProof, Proof, Witness};
pub use errors::VrfError;
pub use hash_to_curve::hash_to_curve;
pub use challenge::hash_points;
pub use verify::{
    compute_fast_verify_params, fast_verify, fast_verify_checked, verify, verify_checked,
};
pub use prover::{LocalProver, Prover};

// Version and protocol constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROTOCOL_VERSION: u32 = 1;
