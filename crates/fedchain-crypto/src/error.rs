use thiserror::Error;

/// Failures of the aggregate-public-key pipeline.
///
/// The `UncompressedKeyRejected` and `InvalidAggregateKey` messages are
/// matched verbatim by operators and tooling; do not reword them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("malformed public key encoding at byte {offset}: {reason}")]
    MalformedKeyEncoding {
        offset: usize,
        reason: MalformedReason,
    },

    /// Carries the hex of the first uncompressed key in input order.
    #[error("Uncompressed public key format are not acceptable: {0}")]
    UncompressedKeyRejected(String),

    /// Carries the full configuration string exactly as supplied.
    #[error("Aggregate Public Key for Signed Block is invalid: {0}")]
    InvalidAggregateKey(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("not valid hex ({0})")]
    InvalidHex(String),

    #[error("unknown key format prefix 0x{0:02x}")]
    UnknownPrefix(u8),

    #[error("key record needs {needed} bytes but only {remaining} remain")]
    Truncated { needed: usize, remaining: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid signature encoding")]
    InvalidSignature,

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("combined secret key is zero")]
    ZeroCombinedKey,
}
