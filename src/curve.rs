//! Affine point helpers over the secp256k1 backend.
//!
//! This is not a general elliptic-curve layer. It wraps exactly the group
//! operations verification needs: validity checks, decompression by parity,
//! addition and subtraction, multiplication of an arbitrary point, fixed
//! generator multiplication and the combined form `na*A + ng*G`. Scalars are
//! reduced into the group order on ingestion; field elements out of range are
//! rejected, never wrapped.

use libsecp256k1::curve::{Affine, Field, Jacobian, Scalar};
use libsecp256k1::{ECMULT_CONTEXT, ECMULT_GEN_CONTEXT};

use crate::errors::VrfError;

/// b coefficient of the curve equation `y^2 = x^3 + 7`.
const CURVE_B: u32 = 7;

/// Right-hand side of the curve equation for a given x.
#[must_use]
pub fn y_squared(x: &Field) -> Field {
    let x2 = *x * *x;
    let x3 = x2 * *x;
    let mut y2 = x3 + Field::from_int(CURVE_B);
    y2.normalize();
    y2
}

/// Confirm the point is on the curve and is not the identity.
///
/// # Errors
/// Returns `VrfError::InvalidPoint` otherwise.
pub fn check_point(p: &Affine) -> Result<(), VrfError> {
    if p.is_infinity() || !p.is_valid_var() {
        return Err(VrfError::InvalidPoint);
    }
    Ok(())
}

/// Recover the point with the given x coordinate and y parity.
///
/// # Errors
/// Returns `VrfError::InvalidPoint` when x is not the abscissa of any curve
/// point.
pub fn decompress(x: &Field, odd: bool) -> Result<Affine, VrfError> {
    let mut p = Affine::default();
    if !p.set_xo_var(x, odd) {
        return Err(VrfError::InvalidPoint);
    }
    p.x.normalize();
    p.y.normalize();
    Ok(p)
}

/// Normalized affine form of a Jacobian point.
#[must_use]
pub fn jacobian_to_affine(j: &Jacobian) -> Affine {
    let mut r = Affine::default();
    if j.is_infinity() {
        r.infinity = true;
        return r;
    }
    r.set_gej(j);
    r.x.normalize();
    r.y.normalize();
    r
}

/// Point negation.
#[must_use]
pub fn neg(a: &Affine) -> Affine {
    let mut r = *a;
    r.y = r.y.neg(1);
    r.y.normalize();
    r
}

/// Point addition `A + B`.
#[must_use]
pub fn add(a: &Affine, b: &Affine) -> Affine {
    let mut j = Jacobian::default();
    j.set_ge(a);
    let sum = j.add_ge(b);
    jacobian_to_affine(&sum)
}

/// Point subtraction `A - B`.
#[must_use]
pub fn sub(a: &Affine, b: &Affine) -> Affine {
    add(a, &neg(b))
}

/// Point doubling `2*A`.
#[must_use]
pub fn double(a: &Affine) -> Affine {
    add(a, a)
}

/// Generic scalar multiplication `k*A`. This is the expensive operation the
/// fast verification path exists to avoid.
#[must_use]
pub fn mul(a: &Affine, k: &Scalar) -> Affine {
    lincomb(k, a, &Scalar::from_int(0))
}

/// Fixed-generator multiplication `k*G`.
#[must_use]
pub fn mul_gen(k: &Scalar) -> Affine {
    let mut rj = Jacobian::default();
    ECMULT_GEN_CONTEXT.ecmult_gen(&mut rj, k);
    jacobian_to_affine(&rj)
}

/// Combined multiplication `na*A + ng*G` in a single pass.
#[must_use]
pub fn lincomb(na: &Scalar, a: &Affine, ng: &Scalar) -> Affine {
    let mut aj = Jacobian::default();
    aj.set_ge(a);
    let mut rj = Jacobian::default();
    ECMULT_CONTEXT.ecmult(&mut rj, &aj, na, ng);
    jacobian_to_affine(&rj)
}

/// x coordinate of a point reduced into the scalar group order.
#[must_use]
pub fn field_to_scalar(x: &Field) -> Scalar {
    let mut s = Scalar::default();
    let _ = s.set_b32(&x.b32());
    s
}

/// Coordinate-wise equality on normalized points.
#[must_use]
pub fn point_eq(a: &Affine, b: &Affine) -> bool {
    if a.is_infinity() || b.is_infinity() {
        return a.is_infinity() == b.is_infinity();
    }
    let (mut ax, mut ay, mut bx, mut by) = (a.x, a.y, b.x, b.y);
    ax.normalize();
    ay.normalize();
    bx.normalize();
    by.normalize();
    ax.b32() == bx.b32() && ay.b32() == by.b32()
}
