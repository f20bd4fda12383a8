//! Aggregate public key: the secp256k1 point sum of every federation member's
//! key. This single key authorizes blocks where a mined chain would check a
//! proof-of-work target, so it must be validated identically everywhere.

use std::fmt;

use fedchain_core::constants::COMPRESSED_PUBKEY_LEN;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, PublicKey};
use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::error::KeyError;
use crate::pubkey::{decode_pubkeys, KeyFormat, PublicKeyRecord};

/// A validated aggregate public key: on the curve and not the identity.
#[derive(Clone)]
pub struct AggregatePublicKey {
    key: PublicKey,
    compressed: [u8; COMPRESSED_PUBKEY_LEN],
}

impl AggregatePublicKey {
    fn from_public_key(key: PublicKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut compressed = [0u8; COMPRESSED_PUBKEY_LEN];
        compressed.copy_from_slice(encoded.as_bytes());
        Self { key, compressed }
    }

    pub fn as_public_key(&self) -> &PublicKey {
        &self.key
    }

    /// 33-byte SEC1 compressed encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_PUBKEY_LEN] {
        self.compressed
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed)
    }
}

impl PartialEq for AggregatePublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Eq for AggregatePublicKey {}

impl fmt::Display for AggregatePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AggregatePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregatePublicKey({})", self.to_hex())
    }
}

impl Serialize for AggregatePublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Validate decoded key records and sum them into the aggregate key.
///
/// Checks (in order):
/// 1. Every record is compressed; the first uncompressed one is reported.
/// 2. Every record is a point on the curve.
/// 3. The sum is not the point at infinity (an empty list sums to it).
///
/// Failures of 2 and 3 report `source_hex`, the whole configuration string,
/// not the offending term. There is no limit on the number of keys.
pub fn aggregate_pubkeys(
    records: &[PublicKeyRecord],
    source_hex: &str,
) -> Result<AggregatePublicKey, KeyError> {
    // ── 1. Format gate ───────────────────────────────────────────────────────
    for record in records {
        match record.format() {
            KeyFormat::Compressed => {}
            KeyFormat::Uncompressed => {
                warn!(key = %record.to_hex(), "uncompressed federation key rejected");
                return Err(KeyError::UncompressedKeyRejected(record.to_hex()));
            }
            KeyFormat::Invalid => {
                return Err(KeyError::InvalidAggregateKey(source_hex.to_string()));
            }
        }
    }

    let invalid = || KeyError::InvalidAggregateKey(source_hex.to_string());

    // ── 2. Point sum ─────────────────────────────────────────────────────────
    let mut sum = ProjectivePoint::IDENTITY;
    for record in records {
        let point = PublicKey::from_sec1_bytes(record.as_bytes()).map_err(|_| invalid())?;
        sum += point.to_projective();
    }

    // ── 3. Validity gate ─────────────────────────────────────────────────────
    // `from_affine` refuses the identity.
    let key = PublicKey::from_affine(sum.to_affine()).map_err(|_| invalid())?;
    let aggregate = AggregatePublicKey::from_public_key(key);

    info!(
        keys = records.len(),
        aggregate = %aggregate,
        "aggregate public key validated"
    );
    Ok(aggregate)
}

/// Decode a `signblockpubkey` value and validate its aggregate.
pub fn parse_aggregate_pubkey(input: &str) -> Result<AggregatePublicKey, KeyError> {
    let records = decode_pubkeys(input)?;
    aggregate_pubkeys(&records, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::{NonZeroScalar, Scalar};

    const KNOWN_KEY: &str = "03831a69b8009833ab5b0326012eaf489bfea35a7321b1ca15b11d88131423fafc";
    const UNCOMPRESSED: &str = "046b93737b4e8d93e79464f2054434015326f1834be1ec47e23377a8cc622b94a03f3c58c0c33248e2bb733269751facb479c098eec6ce254e00c7e45c103b7cd7";
    const G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G2: &str = "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";
    const G3: &str = "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

    fn pubkey_hex(scalar: Scalar) -> String {
        let nz = Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar)).unwrap();
        let pk = PublicKey::from_secret_scalar(&nz);
        hex::encode(pk.to_encoded_point(true).as_bytes())
    }

    #[test]
    fn single_key_aggregates_to_itself() {
        let agg = parse_aggregate_pubkey(KNOWN_KEY).unwrap();
        assert_eq!(agg.to_hex(), KNOWN_KEY);
    }

    #[test]
    fn keys_are_summed_as_points() {
        // 1·G + 2·G = 3·G
        let agg = parse_aggregate_pubkey(&format!("{G}{G2}")).unwrap();
        assert_eq!(agg.to_hex(), G3);
    }

    #[test]
    fn uncompressed_key_rejected_wherever_it_appears() {
        let expected = format!("Uncompressed public key format are not acceptable: {UNCOMPRESSED}");
        for input in [
            UNCOMPRESSED.to_string(),
            format!("{G}{UNCOMPRESSED}"),
            format!("{G}{G2}{UNCOMPRESSED}"),
            format!("{UNCOMPRESSED}{G}"),
        ] {
            let err = parse_aggregate_pubkey(&input).unwrap_err();
            assert_eq!(err, KeyError::UncompressedKeyRejected(UNCOMPRESSED.to_string()));
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn empty_input_is_invalid_aggregate() {
        let err = parse_aggregate_pubkey("").unwrap_err();
        assert_eq!(err, KeyError::InvalidAggregateKey(String::new()));
        assert_eq!(err.to_string(), "Aggregate Public Key for Signed Block is invalid: ");
    }

    #[test]
    fn cancelling_keys_are_invalid_with_full_input() {
        // 1·G + 2·G + (n - 3)·G = identity
        let neg3 = pubkey_hex(-Scalar::from(3u64));
        let input = format!("{G}{G2}{neg3}");
        let err = parse_aggregate_pubkey(&input).unwrap_err();
        assert_eq!(err, KeyError::InvalidAggregateKey(input.clone()));

        // Any one of them on its own is fine.
        assert_eq!(parse_aggregate_pubkey(&neg3).unwrap().to_hex(), neg3);
    }

    #[test]
    fn off_curve_key_is_invalid_aggregate() {
        // x = 5 has no matching y on secp256k1.
        let off_curve = format!("02{}05", "00".repeat(31));
        let input = format!("{G}{off_curve}");
        assert_eq!(
            parse_aggregate_pubkey(&input).unwrap_err(),
            KeyError::InvalidAggregateKey(input.clone())
        );
    }

    #[test]
    fn fifteen_valid_keys_are_accepted() {
        let input: String = (1u64..=15).map(|k| pubkey_hex(Scalar::from(k))).collect();
        let agg = parse_aggregate_pubkey(&input).unwrap();
        // 1 + 2 + … + 15 = 120
        assert_eq!(agg.to_hex(), pubkey_hex(Scalar::from(120u64)));
    }

    #[test]
    fn results_are_deterministic() {
        let ok = format!("{G}{G2}");
        assert_eq!(parse_aggregate_pubkey(&ok), parse_aggregate_pubkey(&ok));
        assert_eq!(parse_aggregate_pubkey(""), parse_aggregate_pubkey(""));
        assert_eq!(
            parse_aggregate_pubkey(UNCOMPRESSED),
            parse_aggregate_pubkey(UNCOMPRESSED)
        );
    }
}
