//! Deterministic mapping from `(public key, alpha)` to a curve point.
//!
//! Try-and-increment: hash the domain-separated input with an incrementing
//! counter byte, treat the digest as a candidate x coordinate and accept the
//! first candidate that lands on the curve, always taking the even-y root.
//! Roughly half of all x values are abscissas, so the expected number of
//! attempts is two; the loop is still bounded at 256 iterations and reports
//! exhaustion as an internal invariant violation instead of spinning.

use libsecp256k1::curve::{Affine, Field};
use sha2::{Digest, Sha256};

use crate::{
    curve,
    domain::{SUITE_ID, TAG_HASH_TO_CURVE},
    errors::VrfError,
    ser::encode_compressed,
    types::COMPRESSED_POINT_LEN,
};

/// Map a public key and message to a curve point.
///
/// Candidate x = `SHA-256(suite || 0x01 || compressed(Y) || alpha || ctr)`
/// for `ctr = 0, 1, 2, ...`; the returned point is never the identity.
///
/// # Errors
/// Returns `VrfError::HashToCurveExhausted` if no candidate lands on the
/// curve within the retry bound. With sane curve parameters this cannot
/// happen in practice.
pub fn hash_to_curve(public_key: &Affine, alpha: &[u8]) -> Result<Affine, VrfError> {
    let mut prefix = Vec::with_capacity(2 + COMPRESSED_POINT_LEN + alpha.len());
    prefix.push(SUITE_ID);
    prefix.push(TAG_HASH_TO_CURVE);
    prefix.extend_from_slice(&encode_compressed(public_key));
    prefix.extend_from_slice(alpha);

    for ctr in 0..=u8::MAX {
        let mut hasher = Sha256::new();
        hasher.update(&prefix);
        hasher.update([ctr]);
        let digest: [u8; 32] = hasher.finalize().into();

        let mut x = Field::default();
        // A digest at or above the field prime is not a coordinate; skip it.
        if !x.set_b32(&digest) {
            continue;
        }
        if let Ok(point) = curve::decompress(&x, false) {
            return Ok(point);
        }
    }
    Err(VrfError::HashToCurveExhausted)
}
