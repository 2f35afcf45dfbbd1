//! Proof generation boundary.
//!
//! Verification treats the prover as an external collaborator and assumes
//! nothing about it beyond this interface. [`LocalProver`] implements the
//! same contract in-process with the shared domain constants, which is what
//! the tests and benches drive end to end; callers with an out-of-process
//! prover only need `decode_proof` from here.

use libsecp256k1::curve::{Affine, Scalar};
use libsecp256k1::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::{
    challenge::hash_points,
    curve,
    domain::{SUITE_ID, TAG_NONCE},
    errors::VrfError,
    hash_to_curve::hash_to_curve,
    ser,
    types::{EncodedProof, Proof},
};

/// Key generation, proof generation and proof decoding.
pub trait Prover {
    /// Generate a fresh keypair.
    fn generate_keypair(&self) -> (SecretKey, Affine);

    /// Produce an encoded proof for `alpha` under `secret_key`.
    ///
    /// # Errors
    /// Returns `VrfError` when proof construction fails.
    fn generate_proof(&self, secret_key: &SecretKey, alpha: &[u8]) -> Result<EncodedProof, VrfError>;

    /// Decode an opaque proof blob into its `(Gamma, c, s)` triple.
    ///
    /// # Errors
    /// Returns `VrfError` when the encoding is malformed.
    fn decode_proof(&self, bytes: &[u8]) -> Result<Proof, VrfError>;
}

/// In-process prover sharing the verifier's domain constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalProver;

impl LocalProver {
    /// Parse a secret key from raw bytes.
    ///
    /// # Errors
    /// Returns `VrfError::InvalidSecretKey` for zero or unreduced values.
    pub fn secret_key_from_bytes(bytes: &[u8; 32]) -> Result<SecretKey, VrfError> {
        SecretKey::parse(bytes).map_err(|_| VrfError::InvalidSecretKey)
    }
}

/// Deterministic nonce: SHA-256 over the secret scalar and the nonce point,
/// with a counter byte retried until the scalar is nonzero.
fn derive_nonce(secret_key: &SecretKey, h: &Affine) -> Result<Scalar, VrfError> {
    for ctr in 0..=u8::MAX {
        let mut hasher = Sha256::new();
        hasher.update([SUITE_ID, TAG_NONCE]);
        hasher.update(secret_key.serialize());
        hasher.update(ser::encode_compressed(h));
        hasher.update([ctr]);
        let digest: [u8; 32] = hasher.finalize().into();

        let mut k = Scalar::default();
        let _ = k.set_b32(&digest);
        if !k.is_zero() {
            return Ok(k);
        }
    }
    Err(VrfError::NonceExhausted)
}

impl Prover for LocalProver {
    fn generate_keypair(&self) -> (SecretKey, Affine) {
        let secret_key = SecretKey::random(&mut OsRng);
        let mut public_key: Affine = PublicKey::from_secret_key(&secret_key).into();
        public_key.x.normalize();
        public_key.y.normalize();
        (secret_key, public_key)
    }

    fn generate_proof(&self, secret_key: &SecretKey, alpha: &[u8]) -> Result<EncodedProof, VrfError> {
        let sk_scalar: Scalar = secret_key.clone().into();
        let public_key = curve::mul_gen(&sk_scalar);

        let h = hash_to_curve(&public_key, alpha)?;
        let gamma = curve::mul(&h, &sk_scalar);
        let k = derive_nonce(secret_key, &h)?;
        let k_g = curve::mul_gen(&k);
        let k_h = curve::mul(&h, &k);

        let c = hash_points(&[public_key, h, gamma, k_g, k_h]);
        let s = k + c * sk_scalar;

        Ok(ser::encode_proof(&Proof::new(gamma, c, s)))
    }

    fn decode_proof(&self, bytes: &[u8]) -> Result<Proof, VrfError> {
        ser::decode_proof(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::point_eq;

    #[test]
    fn generated_proofs_decode_to_their_triple() {
        let prover = LocalProver;
        let (sk, pk) = prover.generate_keypair();
        let encoded = prover.generate_proof(&sk, b"input").expect("proving succeeds");
        let proof = prover.decode_proof(&encoded.0).expect("own encoding decodes");

        // Gamma is sk*H by construction.
        let sk_scalar: Scalar = sk.into();
        let h = hash_to_curve(&pk, b"input").unwrap();
        assert!(point_eq(&proof.gamma, &curve::mul(&h, &sk_scalar)));
    }

    #[test]
    fn proving_is_deterministic_per_key_and_input() {
        let prover = LocalProver;
        let sk = LocalProver::secret_key_from_bytes(&[7u8; 32]).unwrap();
        let a = prover.generate_proof(&sk, b"same input").unwrap();
        let b = prover.generate_proof(&sk, b"same input").unwrap();
        assert_eq!(a.0, b.0);

        let c = prover.generate_proof(&sk, b"other input").unwrap();
        assert_ne!(a.0, c.0);
    }

    #[test]
    fn secret_key_rejects_zero() {
        assert!(matches!(
            LocalProver::secret_key_from_bytes(&[0u8; 32]),
            Err(VrfError::InvalidSecretKey)
        ));
    }

    #[test]
    fn decode_rejects_malformed_blobs() {
        let prover = LocalProver;
        assert!(prover.decode_proof(&[0u8; 81]).is_err());
        assert!(prover.decode_proof(b"short").is_err());
    }
}
