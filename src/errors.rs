use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VrfError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("point is not on the curve or is the identity")]
    InvalidPoint,

    #[error("scalar is not reduced into the group order")]
    InvalidScalar,

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("decode error: {0}")]
    DecodeError(&'static str),

    #[error("challenge recomputation mismatch")]
    ForgedProof,

    #[error("witness point failed the recovery check")]
    ForgedWitness,

    #[error("hash-to-curve exhausted its retry bound")]
    HashToCurveExhausted,

    #[error("nonce derivation exhausted its retry bound")]
    NonceExhausted,
}
