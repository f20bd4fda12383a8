use fedchain_core::constants::COMPRESSED_PUBKEY_LEN;
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::rand_core::CryptoRngCore;
use k256::{NonZeroScalar, Scalar};
use zeroize::Zeroizing;

use crate::error::SignatureError;

/// A secp256k1 secret key held by a federation member.
///
/// Keys combine by scalar addition, mirroring how public keys combine by point
/// addition: the sum of the members' secrets signs for the aggregate key.
pub struct FederationKey {
    signing_key: SigningKey,
}

impl FederationKey {
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self {
            signing_key: SigningKey::random(rng),
        }
    }

    /// Restore from a 32-byte big-endian secret scalar.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignatureError> {
        let signing_key =
            SigningKey::from_bytes(bytes.into()).map_err(|_| SignatureError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(s, &mut bytes[..]).map_err(|_| SignatureError::InvalidSecretKey)?;
        Self::from_bytes(&bytes)
    }

    /// Sum the secrets of `keys` into one key whose public key is the point
    /// sum of theirs.
    pub fn combine(keys: &[FederationKey]) -> Result<Self, SignatureError> {
        let mut sum = Scalar::ZERO;
        for key in keys {
            let scalar: &Scalar = key.signing_key.as_nonzero_scalar().as_ref();
            sum += *scalar;
        }
        let nonzero = Option::<NonZeroScalar>::from(NonZeroScalar::new(sum))
            .ok_or(SignatureError::ZeroCombinedKey)?;
        Ok(Self {
            signing_key: SigningKey::from(nonzero),
        })
    }

    /// Compressed SEC1 public key.
    pub fn public_key(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        let encoded = self.signing_key.verifying_key().to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_PUBKEY_LEN];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    /// Secret scalar bytes, wiped when the returned value is dropped.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl std::fmt::Debug for FederationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FederationKey {{ public_key: {} }}", self.public_key_hex())
    }
}
