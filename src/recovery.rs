//! Scalar-multiplication checks built on the signature-recovery primitive.
//!
//! Recovery computes `r^-1 * (sigs*R - msg*G)` where `R` is the point with
//! abscissa `sigr` and the parity selected by the recovery id. Choosing the
//! inputs carefully turns that single cheap operation into a proof that a
//! supplied point equals a scalar multiple of a base point, without ever
//! running a generic arbitrary-point multiplication:
//!
//! * `sigr = x(P)`, `sigs = k*x(P)`, `msg = 0` recovers exactly `k*P`.
//! * `sigr = x(Y)`, `sigs = (n-c)*x(Y)`, `msg = (n-s)*x(Y)` recovers exactly
//!   `s*G - c*Y`.
//!
//! Points are compared through their 20-byte Keccak-256 identity, the same
//! identity a native recovery primitive reports.

use libsecp256k1::curve::{Affine, Scalar};
use libsecp256k1::ECMULT_CONTEXT;
use sha3::{Digest, Keccak256};

use crate::{curve::field_to_scalar, types::ADDRESS_LEN};

/// Low 20 bytes of `Keccak-256(x || y)`, the recovery identity of a point.
#[must_use]
pub fn point_address(p: &Affine) -> [u8; ADDRESS_LEN] {
    let (mut x, mut y) = (p.x, p.y);
    x.normalize();
    y.normalize();
    let mut hasher = Keccak256::new();
    hasher.update(x.b32());
    hasher.update(y.b32());
    let digest = hasher.finalize();
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(&digest[32 - ADDRESS_LEN..]);
    out
}

/// Check `expected == k*base` with one recovery operation.
///
/// Degenerate inputs (a base abscissa of zero mod n, a zero product) make
/// recovery fail and the check report false; they never panic.
#[must_use]
pub fn ec_mul_verify(k: &Scalar, base: &Affine, expected: &Affine) -> bool {
    let r = field_to_scalar(&base.x);
    if r.is_zero() {
        return false;
    }
    let sigs = *k * r;
    let msg = Scalar::from_int(0);
    let mut by = base.y;
    by.normalize();
    let recid = u8::from(by.is_odd());
    match ECMULT_CONTEXT.recover_raw(&r, &sigs, recid, &msg) {
        Ok(recovered) => point_address(&recovered) == point_address(expected),
        Err(_) => false,
    }
}

/// Check `expected == s*G - c*base` with one recovery operation plus the
/// native-cheap fixed-generator term folded into the message.
#[must_use]
pub fn ec_mul_sub_mul_verify(s: &Scalar, c: &Scalar, base: &Affine, expected: &Affine) -> bool {
    let r = field_to_scalar(&base.x);
    if r.is_zero() {
        return false;
    }
    let msg = -*s * r;
    let sigs = -*c * r;
    let mut by = base.y;
    by.normalize();
    let recid = u8::from(by.is_odd());
    match ECMULT_CONTEXT.recover_raw(&r, &sigs, recid, &msg) {
        Ok(recovered) => point_address(&recovered) == point_address(expected),
        Err(_) => false,
    }
}
