//! Domain-separation constants shared by the prover and verifier sides.
//!
//! The suite byte and the per-operation tag bytes prefix every hash input so
//! that a digest produced for one purpose can never collide with a digest
//! produced for another. They must stay byte-identical between proof
//! generation and verification.

/// Ciphersuite identifier, first byte of every domain-separated hash input.
pub const SUITE_ID: u8 = 0xfe;

/// Tag for the try-and-increment hash-to-curve derivation.
pub const TAG_HASH_TO_CURVE: u8 = 0x01;

/// Tag for the challenge hash over the verification points.
pub const TAG_CHALLENGE: u8 = 0x02;

/// Tag for deterministic nonce derivation on the prover side.
pub const TAG_NONCE: u8 = 0x03;
