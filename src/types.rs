use core::convert::TryFrom;
use core::fmt;

use libsecp256k1::curve::{Affine, Scalar};

use crate::errors::VrfError;

pub const COMPRESSED_POINT_LEN: usize = 33;  // parity byte || x
pub const AFFINE_POINT_LEN: usize = 64;      // x || y
pub const SCALAR_LEN: usize = 32;
pub const CHALLENGE_LEN: usize = 16;         // c travels truncated to 128 bits
pub const PROOF_LEN: usize = COMPRESSED_POINT_LEN + CHALLENGE_LEN + SCALAR_LEN; // 81
pub const ADDRESS_LEN: usize = 20;

/// Wire form of a proof: `compressed(Gamma) || c (16 bytes) || s (32 bytes)`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct EncodedProof(pub [u8; PROOF_LEN]);

impl TryFrom<&[u8]> for EncodedProof {
    type Error = VrfError;

    fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
        if b.len() != PROOF_LEN {
            return Err(VrfError::InvalidLength { expected: PROOF_LEN, got: b.len() });
        }
        let mut arr = [0u8; PROOF_LEN];
        arr.copy_from_slice(b);
        Ok(Self(arr))
    }
}

impl fmt::Debug for EncodedProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedProof(0x{})", hex::encode(self.0))
    }
}

/// Decoded proof triple `(Gamma, c, s)`.
///
/// `gamma` is an affine curve point; `c` is the 128-bit truncated challenge
/// scalar; `s` is a full-width scalar. All three are read-only inputs to
/// verification and are never mutated by it.
#[derive(Clone, Copy, Debug)]
pub struct Proof {
    pub gamma: Affine,
    pub c: Scalar,
    pub s: Scalar,
}

impl Proof {
    #[must_use]
    pub const fn new(gamma: Affine, c: Scalar, s: Scalar) -> Self {
        Self { gamma, c, s }
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut gamma = self.gamma;
        gamma.x.normalize();
        gamma.y.normalize();
        write!(
            f,
            "gamma: (0x{}, 0x{})\nc: 0x{}\ns: 0x{}",
            hex::encode(gamma.x.b32()),
            hex::encode(gamma.y.b32()),
            hex::encode(self.c.b32()),
            hex::encode(self.s.b32()),
        )
    }
}

/// Witness bundle consumed by the fast verification path.
///
/// `u` is the claimed `s*G - c*Y`, `s_h` the claimed `s*H` and `c_gamma` the
/// claimed `c*Gamma`. The bundle carries no authority of its own: every point
/// is re-validated and re-derived through the recovery check before it
/// participates in the challenge recomputation.
#[derive(Clone, Copy, Debug)]
pub struct Witness {
    pub u: Affine,
    pub s_h: Affine,
    pub c_gamma: Affine,
}
