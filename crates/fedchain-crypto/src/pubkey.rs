//! Codec for the `signblockpubkey` configuration value: a hex string of zero
//! or more SEC1 public keys laid end to end, with no separators.

use std::fmt;

use fedchain_core::constants::{
    COMPRESSED_PUBKEY_LEN, PUBKEY_PREFIX_EVEN, PUBKEY_PREFIX_ODD, PUBKEY_PREFIX_UNCOMPRESSED,
    UNCOMPRESSED_PUBKEY_LEN,
};
use tracing::debug;

use crate::error::{KeyError, MalformedReason};

/// SEC1 encoding family, read from a key's leading byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
    /// 0x02 / 0x03, 33 bytes.
    Compressed,
    /// 0x04, 65 bytes.
    Uncompressed,
    Invalid,
}

impl KeyFormat {
    pub fn from_prefix(prefix: u8) -> Self {
        match prefix {
            PUBKEY_PREFIX_EVEN | PUBKEY_PREFIX_ODD => KeyFormat::Compressed,
            PUBKEY_PREFIX_UNCOMPRESSED => KeyFormat::Uncompressed,
            _ => KeyFormat::Invalid,
        }
    }
}

/// One public key exactly as it appeared in the input. Only the length and
/// prefix are known to be consistent; curve membership is checked during
/// aggregation.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyRecord {
    format: KeyFormat,
    bytes: Vec<u8>,
}

impl PublicKeyRecord {
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Debug for PublicKeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyRecord({:?}, {})", self.format, self.to_hex())
    }
}

/// Split `input` into key records by reading each record's prefix byte and
/// consuming the length it implies.
///
/// An empty string yields an empty list; rejecting it is left to aggregation.
pub fn decode_pubkeys(input: &str) -> Result<Vec<PublicKeyRecord>, KeyError> {
    let bytes = hex::decode(input).map_err(|e| KeyError::MalformedKeyEncoding {
        offset: hex_error_offset(input),
        reason: MalformedReason::InvalidHex(e.to_string()),
    })?;

    let mut records = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let prefix = bytes[offset];
        let format = KeyFormat::from_prefix(prefix);
        let needed = match format {
            KeyFormat::Compressed => COMPRESSED_PUBKEY_LEN,
            KeyFormat::Uncompressed => UNCOMPRESSED_PUBKEY_LEN,
            KeyFormat::Invalid => {
                return Err(KeyError::MalformedKeyEncoding {
                    offset,
                    reason: MalformedReason::UnknownPrefix(prefix),
                })
            }
        };

        let remaining = bytes.len() - offset;
        if needed > remaining {
            return Err(KeyError::MalformedKeyEncoding {
                offset,
                reason: MalformedReason::Truncated { needed, remaining },
            });
        }

        records.push(PublicKeyRecord {
            format,
            bytes: bytes[offset..offset + needed].to_vec(),
        });
        offset += needed;
    }

    debug!(count = records.len(), "decoded public key records");
    Ok(records)
}

/// Byte offset of the first non-hex character, or of the dangling nibble
/// when every character is hex but the length is odd.
fn hex_error_offset(input: &str) -> usize {
    input
        .bytes()
        .position(|b| !b.is_ascii_hexdigit())
        .unwrap_or(input.len())
        / 2
}
