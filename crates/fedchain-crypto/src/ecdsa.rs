use fedchain_core::block::BlockProof;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, VerifyingKey};

use crate::aggregate::AggregatePublicKey;
use crate::error::SignatureError;
use crate::keypair::FederationKey;

/// Sign a 32-byte digest. RFC 6979 nonces, so the same key and digest always
/// give the same proof; k256 emits low-S signatures.
pub fn sign_digest(key: &FederationKey, digest: &[u8; 32]) -> Result<BlockProof, SignatureError> {
    let sig: Signature = key
        .signing_key()
        .sign_prehash(digest)
        .map_err(|e| SignatureError::Signing(e.to_string()))?;
    Ok(BlockProof(sig.to_bytes().to_vec()))
}

/// Verify a block proof over `digest` against the aggregate key.
pub fn verify_digest(
    key: &AggregatePublicKey,
    digest: &[u8; 32],
    proof: &BlockProof,
) -> Result<(), SignatureError> {
    let sig = Signature::from_slice(proof.as_bytes()).map_err(|_| SignatureError::InvalidSignature)?;
    let verifying_key = VerifyingKey::from(key.as_public_key());
    verifying_key
        .verify_prehash(digest, &sig)
        .map_err(|_| SignatureError::VerificationFailed)
}
