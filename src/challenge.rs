//! Fiat-Shamir challenge derivation over an ordered tuple of points.

use libsecp256k1::curve::{Affine, Scalar};
use sha2::{Digest, Sha256};

use crate::{
    domain::{SUITE_ID, TAG_CHALLENGE},
    ser::encode_compressed,
    types::{CHALLENGE_LEN, SCALAR_LEN},
};

/// Hash an ordered sequence of points into a 128-bit challenge scalar.
///
/// The digest input is `suite || 0x02` followed by the compressed encoding
/// of every point in order; the first 16 digest bytes are interpreted as a
/// big-endian integer. Identical point sequences always produce identical
/// scalars.
#[must_use]
pub fn hash_points(points: &[Affine]) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update([SUITE_ID, TAG_CHALLENGE]);
    for point in points {
        hasher.update(encode_compressed(point));
    }
    let digest = hasher.finalize();

    let mut wide = [0u8; SCALAR_LEN];
    wide[SCALAR_LEN - CHALLENGE_LEN..].copy_from_slice(&digest[..CHALLENGE_LEN]);
    let mut c = Scalar::default();
    // 128 bits can never overflow the group order.
    let _ = c.set_b32(&wide);
    c
}
