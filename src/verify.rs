//! Proof verification: the standard path, the witness-accelerated fast path
//! and the helper that precomputes the fast path's witness bundle.
//!
//! The standard path is the reference semantics. The fast path must accept
//! and reject exactly the same inputs; it trades two generic scalar
//! multiplications for three recovery checks over caller-supplied witness
//! points, which is the profitable exchange wherever recovery is a native
//! primitive and generic multiplication is metered.

use libsecp256k1::curve::Affine;

use crate::{
    challenge::hash_points,
    curve,
    errors::VrfError,
    hash_to_curve::hash_to_curve,
    recovery::{ec_mul_sub_mul_verify, ec_mul_verify},
    types::{Proof, Witness},
};

/// Standard verification of `proof` over `alpha` under `public_key`.
///
/// Recomputes `U = s*G - c*Y` and `V = s*H - c*Gamma` with generic scalar
/// multiplication, then checks that the challenge over
/// `(Y, H, Gamma, U, V)` reproduces the proof's `c`.
///
/// # Errors
/// `InvalidPoint` for malformed inputs or degenerate intermediate points,
/// `ForgedProof` when the challenge does not reproduce, and the
/// hash-to-curve invariant error if its retry bound is ever exhausted.
pub fn verify_checked(public_key: &Affine, proof: &Proof, alpha: &[u8]) -> Result<(), VrfError> {
    curve::check_point(public_key)?;
    curve::check_point(&proof.gamma)?;

    // U = s*G - c*Y in a single combined multiplication.
    let u = curve::lincomb(&-proof.c, public_key, &proof.s);
    curve::check_point(&u)?;

    let h = hash_to_curve(public_key, alpha)?;

    // V = s*H - c*Gamma. A zero c or s degenerates a partial product to the
    // identity, which rejects here exactly as it does on the fast path.
    let s_h = curve::mul(&h, &proof.s);
    let c_gamma = curve::mul(&proof.gamma, &proof.c);
    curve::check_point(&s_h)?;
    curve::check_point(&c_gamma)?;
    let v = curve::sub(&s_h, &c_gamma);
    curve::check_point(&v)?;

    let derived = hash_points(&[*public_key, h, proof.gamma, u, v]);
    if derived == proof.c {
        Ok(())
    } else {
        Err(VrfError::ForgedProof)
    }
}

/// Standard verification folded to a boolean.
#[must_use]
pub fn verify(public_key: &Affine, proof: &Proof, alpha: &[u8]) -> bool {
    verify_checked(public_key, proof, alpha).is_ok()
}

/// Fast verification consuming a precomputed [`Witness`] bundle.
///
/// Every witness point is validated and then re-derived through a recovery
/// check against its base point before it participates in the challenge
/// recomputation, so a forged bundle cannot steer the result. `V` is
/// recovered from the witnesses by one plain point subtraction; no generic
/// arbitrary-point multiplication runs on this path.
///
/// # Errors
/// `InvalidPoint` for malformed inputs, `ForgedWitness` when a witness fails
/// its recovery check, `ForgedProof` when the challenge does not reproduce.
pub fn fast_verify_checked(
    public_key: &Affine,
    proof: &Proof,
    alpha: &[u8],
    witness: &Witness,
) -> Result<(), VrfError> {
    curve::check_point(public_key)?;
    curve::check_point(&proof.gamma)?;
    curve::check_point(&witness.u)?;
    curve::check_point(&witness.s_h)?;
    curve::check_point(&witness.c_gamma)?;

    if !ec_mul_sub_mul_verify(&proof.s, &proof.c, public_key, &witness.u) {
        return Err(VrfError::ForgedWitness);
    }

    let h = hash_to_curve(public_key, alpha)?;
    if !ec_mul_verify(&proof.s, &h, &witness.s_h) {
        return Err(VrfError::ForgedWitness);
    }
    if !ec_mul_verify(&proof.c, &proof.gamma, &witness.c_gamma) {
        return Err(VrfError::ForgedWitness);
    }

    let v = curve::sub(&witness.s_h, &witness.c_gamma);
    curve::check_point(&v)?;

    let derived = hash_points(&[*public_key, h, proof.gamma, witness.u, v]);
    if derived == proof.c {
        Ok(())
    } else {
        Err(VrfError::ForgedProof)
    }
}

/// Fast verification folded to a boolean.
#[must_use]
pub fn fast_verify(public_key: &Affine, proof: &Proof, alpha: &[u8], witness: &Witness) -> bool {
    fast_verify_checked(public_key, proof, alpha, witness).is_ok()
}

/// Derive the witness bundle `fast_verify` expects, using the same generic
/// arithmetic the standard path runs.
///
/// Pure and side-effect free, so a caller can evaluate it speculatively off
/// the metered path and submit only the cheap check. The output is
/// byte-identical to the values the fast path recomputes against:
/// `fast_verify(y, p, a, &compute_fast_verify_params(y, p, a)?)` always
/// equals `verify(y, p, a)`.
///
/// # Errors
/// `InvalidPoint` for malformed inputs, plus the hash-to-curve invariant
/// error.
pub fn compute_fast_verify_params(
    public_key: &Affine,
    proof: &Proof,
    alpha: &[u8],
) -> Result<Witness, VrfError> {
    curve::check_point(public_key)?;
    curve::check_point(&proof.gamma)?;

    let h = hash_to_curve(public_key, alpha)?;
    let u = curve::lincomb(&-proof.c, public_key, &proof.s);
    let s_h = curve::mul(&h, &proof.s);
    let c_gamma = curve::mul(&proof.gamma, &proof.c);
    Ok(Witness { u, s_h, c_gamma })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curve::{add, mul_gen, point_eq},
        prover::{LocalProver, Prover},
        ser,
    };
    use libsecp256k1::curve::{Field, Scalar};

    fn proven_input(alpha: &[u8]) -> (Affine, Proof) {
        let prover = LocalProver;
        let (sk, pk) = prover.generate_keypair();
        let encoded = prover.generate_proof(&sk, alpha).expect("proving succeeds");
        let proof = prover.decode_proof(&encoded.0).expect("own encoding decodes");
        (pk, proof)
    }

    #[test]
    fn completeness_standard_path() {
        let alpha = b"1700000000000";
        let (pk, proof) = proven_input(alpha);
        assert!(verify(&pk, &proof, alpha));
    }

    #[test]
    fn completeness_fast_path() {
        let alpha = b"1700000000000";
        let (pk, proof) = proven_input(alpha);
        let witness = compute_fast_verify_params(&pk, &proof, alpha).expect("witness derives");
        assert!(fast_verify(&pk, &proof, alpha, &witness));
    }

    #[test]
    fn soundness_corrupted_challenge() {
        let alpha = b"soundness";
        let (pk, mut proof) = proven_input(alpha);
        // Flip one bit of c.
        let mut c_bytes = ser::encode_challenge(&proof.c);
        c_bytes[0] ^= 0x01;
        proof.c = ser::decode_challenge(&c_bytes).unwrap();
        assert!(!verify(&pk, &proof, alpha));
        assert_eq!(verify_checked(&pk, &proof, alpha), Err(VrfError::ForgedProof));
    }

    #[test]
    fn soundness_corrupted_s() {
        let alpha = b"soundness";
        let (pk, mut proof) = proven_input(alpha);
        proof.s += Scalar::from_int(1);
        assert!(!verify(&pk, &proof, alpha));
    }

    #[test]
    fn soundness_swapped_gamma() {
        let alpha = b"soundness";
        let (pk, mut proof) = proven_input(alpha);
        proof.gamma = mul_gen(&Scalar::from_int(1234));
        assert!(!verify(&pk, &proof, alpha));
    }

    #[test]
    fn alpha_extension_invalidates_proof() {
        let alpha = b"1700000000000";
        let (pk, proof) = proven_input(alpha);
        assert!(verify(&pk, &proof, alpha));
        assert!(!verify(&pk, &proof, b"1700000000000dummy"));

        let witness = compute_fast_verify_params(&pk, &proof, b"1700000000000dummy").unwrap();
        assert!(!fast_verify(&pk, &proof, b"1700000000000dummy", &witness));
    }

    #[test]
    fn fast_path_matches_standard_path() {
        for alpha in [&b"a"[..], b"", b"longer input with some structure 12345"] {
            let (pk, proof) = proven_input(alpha);
            let witness = compute_fast_verify_params(&pk, &proof, alpha).unwrap();
            assert_eq!(verify(&pk, &proof, alpha), fast_verify(&pk, &proof, alpha, &witness));

            // A corrupted proof is rejected identically by both paths.
            let mut bad = proof;
            bad.s += Scalar::from_int(7);
            let bad_witness = compute_fast_verify_params(&pk, &bad, alpha).unwrap();
            assert_eq!(verify(&pk, &bad, alpha), fast_verify(&pk, &bad, alpha, &bad_witness));
            assert!(!fast_verify(&pk, &bad, alpha, &bad_witness));
        }
    }

    #[test]
    fn witness_tampering_is_detected() {
        let alpha = b"witness tampering";
        let (pk, proof) = proven_input(alpha);
        let witness = compute_fast_verify_params(&pk, &proof, alpha).unwrap();
        assert!(fast_verify(&pk, &proof, alpha, &witness));

        let shift = mul_gen(&Scalar::from_int(1));
        let tampered_u = Witness { u: add(&witness.u, &shift), ..witness };
        assert!(!fast_verify(&pk, &proof, alpha, &tampered_u));

        let tampered_sh = Witness { s_h: add(&witness.s_h, &shift), ..witness };
        assert!(!fast_verify(&pk, &proof, alpha, &tampered_sh));

        let tampered_cg = Witness { c_gamma: add(&witness.c_gamma, &shift), ..witness };
        assert!(!fast_verify(&pk, &proof, alpha, &tampered_cg));
    }

    #[test]
    fn witness_coordinate_corruption_is_detected() {
        let alpha = b"witness coordinate";
        let (pk, proof) = proven_input(alpha);
        let witness = compute_fast_verify_params(&pk, &proof, alpha).unwrap();

        // Nudging a single coordinate leaves the curve or shifts the
        // recovery identity; either way the fast path must reject.
        let mut corrupt = witness;
        corrupt.u.x += Field::from_int(1);
        corrupt.u.x.normalize();
        assert!(!fast_verify(&pk, &proof, alpha, &corrupt));

        let mut corrupt = witness;
        corrupt.s_h.y += Field::from_int(1);
        corrupt.s_h.y.normalize();
        assert!(!fast_verify(&pk, &proof, alpha, &corrupt));
    }

    #[test]
    fn zero_scalars_reject_cleanly() {
        let alpha = b"degenerate scalars";
        let (pk, proof) = proven_input(alpha);

        let mut zero_c = proof;
        zero_c.c = Scalar::from_int(0);
        assert!(!verify(&pk, &zero_c, alpha));

        let mut zero_s = proof;
        zero_s.s = Scalar::from_int(0);
        assert!(!verify(&pk, &zero_s, alpha));

        // The degenerate witness bundle is rejected by point validation.
        let witness = compute_fast_verify_params(&pk, &zero_c, alpha).unwrap();
        assert!(!fast_verify(&pk, &zero_c, alpha, &witness));
    }

    #[test]
    fn invalid_public_key_is_rejected_not_crashed() {
        let alpha = b"invalid inputs";
        let (_, proof) = proven_input(alpha);

        let mut off_curve = Affine::default();
        off_curve.set_xy(&Field::from_int(1), &Field::from_int(1));
        assert_eq!(verify_checked(&off_curve, &proof, alpha), Err(VrfError::InvalidPoint));
        assert!(!verify(&off_curve, &proof, alpha));

        let mut identity = Affine::default();
        identity.infinity = true;
        assert!(!verify(&identity, &proof, alpha));
    }

    #[test]
    fn witness_points_match_standard_intermediates() {
        let alpha = b"equivalence of intermediates";
        let (pk, proof) = proven_input(alpha);
        let witness = compute_fast_verify_params(&pk, &proof, alpha).unwrap();

        let u = curve::lincomb(&-proof.c, &pk, &proof.s);
        assert!(point_eq(&witness.u, &u));

        let h = hash_to_curve(&pk, alpha).unwrap();
        assert!(point_eq(&witness.s_h, &curve::mul(&h, &proof.s)));
        assert!(point_eq(&witness.c_gamma, &curve::mul(&proof.gamma, &proof.c)));
    }
}
