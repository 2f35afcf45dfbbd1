#![no_main]

use libfuzzer_sys::fuzz_target;
use ecvrf_k1::{
    ser::{decode_affine, decode_proof},
    types::{AFFINE_POINT_LEN, PROOF_LEN},
    verify,
};

fuzz_target!(|data: &[u8]| {
    // Need an affine public key, an encoded proof and the rest as alpha
    if data.len() < AFFINE_POINT_LEN + PROOF_LEN {
        return;
    }

    let Ok(public_key) = decode_affine(&data[..AFFINE_POINT_LEN]) else {
        return;
    };
    let Ok(proof) = decode_proof(&data[AFFINE_POINT_LEN..AFFINE_POINT_LEN + PROOF_LEN]) else {
        return;
    };
    let alpha = &data[AFFINE_POINT_LEN + PROOF_LEN..];

    // Arbitrary well-formed inputs must never panic the verifier
    let _ = verify(&public_key, &proof, alpha);
});
