use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::UnknownNetwork;

/// Amount in base units (1 coin = `COIN` base units).
pub type Amount = u64;

/// Unix timestamp (seconds, UTC).
pub type Timestamp = i64;

/// Block height (genesis = 0).
pub type Height = u64;

// ── TxId ─────────────────────────────────────────────────────────────────────

/// 32-byte transaction identifier: BLAKE3 of the canonical serialized tx.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxId(pub [u8; 32]);

impl TxId {
    pub fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({}…)", &self.to_hex()[..16])
    }
}

// ── BlockHash ────────────────────────────────────────────────────────────────

/// 32-byte block identifier: BLAKE3 of the serialized header, proof excluded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    /// The previous-block reference carried by a genesis header.
    pub const ZERO: BlockHash = BlockHash([0u8; 32]);

    pub fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({}…)", &self.to_hex()[..16])
    }
}

// ── MerkleRoot ───────────────────────────────────────────────────────────────

/// Root of the BLAKE3 merkle tree over a block's transaction ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerkleRoot(pub [u8; 32]);

impl MerkleRoot {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for MerkleRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerkleRoot({}…)", &self.to_hex()[..16])
    }
}

// ── Network ──────────────────────────────────────────────────────────────────

/// Network identity. Chain parameters are selected once per process for one
/// of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Message-start bytes prefixed to every wire message on this network.
    pub fn magic(&self) -> [u8; 4] {
        match self {
            Network::Main => MAGIC_MAIN,
            Network::Test => MAGIC_TEST,
            Network::Regtest => MAGIC_REGTEST,
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Network::Main => DEFAULT_PORT_MAIN,
            Network::Test => DEFAULT_PORT_TEST,
            Network::Regtest => DEFAULT_PORT_REGTEST,
        }
    }

    pub fn genesis_timestamp(&self) -> Timestamp {
        match self {
            Network::Main => GENESIS_TIMESTAMP_MAIN,
            Network::Test => GENESIS_TIMESTAMP_TEST,
            Network::Regtest => GENESIS_TIMESTAMP_REGTEST,
        }
    }

    /// Bootstrap text embedded in the genesis coinbase `script_sig`.
    pub fn genesis_message(&self) -> &'static str {
        match self {
            Network::Main => GENESIS_MESSAGE_MAIN,
            Network::Test => GENESIS_MESSAGE_TEST,
            Network::Regtest => GENESIS_MESSAGE_REGTEST,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_names_round_trip() {
        for net in [Network::Main, Network::Test, Network::Regtest] {
            assert_eq!(net.as_str().parse::<Network>().unwrap(), net);
        }
        assert!("mainnet".parse::<Network>().is_err());
    }

    #[test]
    fn networks_have_distinct_magic() {
        assert_ne!(Network::Main.magic(), Network::Test.magic());
        assert_ne!(Network::Test.magic(), Network::Regtest.magic());
    }

    #[test]
    fn hash_hex_rejects_wrong_length() {
        assert!(BlockHash::from_hex("00ff").is_err());
        let h = BlockHash::from_bytes([7u8; 32]);
        assert_eq!(BlockHash::from_hex(&h.to_hex()).unwrap(), h);
    }
}
