//! Fixed-width big-endian encodings shared with the prover library.
//!
//! Points travel either compressed (`0x02|0x03 || x`) or affine (`x || y`),
//! scalars as 32-byte big-endian integers, the truncated challenge as 16
//! bytes. Any width, prefix or range mismatch rejects with an error rather
//! than wrapping.

use libsecp256k1::curve::{Affine, Field, Scalar};

use crate::{
    curve,
    errors::VrfError,
    types::{
        AFFINE_POINT_LEN, CHALLENGE_LEN, COMPRESSED_POINT_LEN, EncodedProof, PROOF_LEN, Proof,
        SCALAR_LEN,
    },
};

/// Compressed point encoding: parity byte then big-endian x.
#[must_use]
pub fn encode_compressed(p: &Affine) -> [u8; COMPRESSED_POINT_LEN] {
    let (mut x, mut y) = (p.x, p.y);
    x.normalize();
    y.normalize();
    let mut out = [0u8; COMPRESSED_POINT_LEN];
    out[0] = if y.is_odd() { 0x03 } else { 0x02 };
    out[1..].copy_from_slice(&x.b32());
    out
}

/// Affine point encoding: big-endian x then big-endian y.
#[must_use]
pub fn encode_affine(p: &Affine) -> [u8; AFFINE_POINT_LEN] {
    let (mut x, mut y) = (p.x, p.y);
    x.normalize();
    y.normalize();
    let mut out = [0u8; AFFINE_POINT_LEN];
    out[..SCALAR_LEN].copy_from_slice(&x.b32());
    out[SCALAR_LEN..].copy_from_slice(&y.b32());
    out
}

/// Decode a compressed point, recovering y from the parity byte.
///
/// # Errors
/// Rejects wrong lengths, unknown prefix bytes, out-of-range x and x values
/// that are not on the curve.
pub fn decode_compressed(b: &[u8]) -> Result<Affine, VrfError> {
    if b.len() != COMPRESSED_POINT_LEN {
        return Err(VrfError::InvalidLength { expected: COMPRESSED_POINT_LEN, got: b.len() });
    }
    let odd = match b[0] {
        0x02 => false,
        0x03 => true,
        _ => return Err(VrfError::DecodeError("invalid compressed point prefix")),
    };
    let mut xb = [0u8; SCALAR_LEN];
    xb.copy_from_slice(&b[1..]);
    let mut x = Field::default();
    if !x.set_b32(&xb) {
        return Err(VrfError::InvalidPoint);
    }
    curve::decompress(&x, odd)
}

/// Decode an affine point from `x || y` without checking the curve equation.
///
/// Coordinates must be reduced below the field prime; the curve-equation and
/// identity checks happen where the point is consumed.
///
/// # Errors
/// Rejects wrong lengths and out-of-range coordinates.
pub fn decode_affine(b: &[u8]) -> Result<Affine, VrfError> {
    if b.len() != AFFINE_POINT_LEN {
        return Err(VrfError::InvalidLength { expected: AFFINE_POINT_LEN, got: b.len() });
    }
    let mut xb = [0u8; SCALAR_LEN];
    let mut yb = [0u8; SCALAR_LEN];
    xb.copy_from_slice(&b[..SCALAR_LEN]);
    yb.copy_from_slice(&b[SCALAR_LEN..]);

    let mut x = Field::default();
    let mut y = Field::default();
    if !x.set_b32(&xb) || !y.set_b32(&yb) {
        return Err(VrfError::InvalidPoint);
    }
    let mut p = Affine::default();
    p.set_xy(&x, &y);
    p.x.normalize();
    p.y.normalize();
    Ok(p)
}

#[must_use]
pub fn encode_scalar(s: &Scalar) -> [u8; SCALAR_LEN] {
    s.b32()
}

/// Decode a full-width scalar, rejecting values at or above the group order.
///
/// # Errors
/// Rejects wrong lengths and unreduced values.
pub fn decode_scalar(b: &[u8]) -> Result<Scalar, VrfError> {
    if b.len() != SCALAR_LEN {
        return Err(VrfError::InvalidLength { expected: SCALAR_LEN, got: b.len() });
    }
    let mut sb = [0u8; SCALAR_LEN];
    sb.copy_from_slice(b);
    let mut s = Scalar::default();
    if bool::from(s.set_b32(&sb)) {
        return Err(VrfError::InvalidScalar);
    }
    Ok(s)
}

/// 16-byte big-endian form of the truncated challenge scalar.
#[must_use]
pub fn encode_challenge(c: &Scalar) -> [u8; CHALLENGE_LEN] {
    let mut out = [0u8; CHALLENGE_LEN];
    out.copy_from_slice(&c.b32()[SCALAR_LEN - CHALLENGE_LEN..]);
    out
}

/// Decode a 128-bit challenge scalar. Cannot overflow the group order.
///
/// # Errors
/// Rejects wrong lengths.
pub fn decode_challenge(b: &[u8]) -> Result<Scalar, VrfError> {
    if b.len() != CHALLENGE_LEN {
        return Err(VrfError::InvalidLength { expected: CHALLENGE_LEN, got: b.len() });
    }
    let mut wide = [0u8; SCALAR_LEN];
    wide[SCALAR_LEN - CHALLENGE_LEN..].copy_from_slice(b);
    let mut c = Scalar::default();
    let _ = c.set_b32(&wide);
    Ok(c)
}

/// Proof wire encoding: `compressed(Gamma) || c || s`.
#[must_use]
pub fn encode_proof(proof: &Proof) -> EncodedProof {
    let mut out = [0u8; PROOF_LEN];
    out[..COMPRESSED_POINT_LEN].copy_from_slice(&encode_compressed(&proof.gamma));
    out[COMPRESSED_POINT_LEN..COMPRESSED_POINT_LEN + CHALLENGE_LEN]
        .copy_from_slice(&encode_challenge(&proof.c));
    out[COMPRESSED_POINT_LEN + CHALLENGE_LEN..].copy_from_slice(&encode_scalar(&proof.s));
    EncodedProof(out)
}

/// Decode the proof triple from its 81-byte wire form.
///
/// # Errors
/// Rejects wrong lengths, malformed Gamma encodings and an unreduced s.
pub fn decode_proof(b: &[u8]) -> Result<Proof, VrfError> {
    if b.len() != PROOF_LEN {
        return Err(VrfError::InvalidLength { expected: PROOF_LEN, got: b.len() });
    }
    let gamma = decode_compressed(&b[..COMPRESSED_POINT_LEN])?;
    let c = decode_challenge(&b[COMPRESSED_POINT_LEN..COMPRESSED_POINT_LEN + CHALLENGE_LEN])?;
    let s = decode_scalar(&b[COMPRESSED_POINT_LEN + CHALLENGE_LEN..])?;
    Ok(Proof::new(gamma, c, s))
}
