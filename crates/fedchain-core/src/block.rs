use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transaction::Transaction;
use crate::types::{BlockHash, MerkleRoot, Timestamp};

// ── BlockProof ────────────────────────────────────────────────────────────────

/// Authorization field of a federated block: a 64-byte compact ECDSA
/// signature by the aggregate key over the header signing hash. Takes the
/// place a proof-of-work nonce has on mined chains.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockProof(pub Vec<u8>);

impl BlockProof {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for BlockProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockProof({}b)", self.0.len())
    }
}

// ── BlockHeader ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: u32,
    /// All zeroes for genesis.
    pub prev_hash: BlockHash,
    pub merkle_root: MerkleRoot,
    pub timestamp: Timestamp,
    /// Federation signature. `None` on an unsigned header.
    pub proof: Option<BlockProof>,
}

/// The header fields that are hashed to produce the block hash and covered by
/// the proof. Excludes `proof` so that signing has no circular dependency.
#[derive(Serialize)]
pub struct HeaderBody<'a> {
    pub version: u32,
    pub prev_hash: &'a BlockHash,
    pub merkle_root: &'a MerkleRoot,
    pub timestamp: Timestamp,
}

impl BlockHeader {
    pub fn body(&self) -> HeaderBody<'_> {
        HeaderBody {
            version: self.version,
            prev_hash: &self.prev_hash,
            merkle_root: &self.merkle_root,
            timestamp: self.timestamp,
        }
    }

    /// Serialize the body to canonical bytes (bincode).
    pub fn body_bytes(&self) -> Vec<u8> {
        bincode::serialize(&self.body()).expect("header body serialization is infallible")
    }
}

// ── Block ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// A block with no predecessor.
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash.is_zero()
    }

    /// Serialize the full block (header with proof, all transactions).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("block serialization is infallible")
    }

    pub fn serialized_size(&self) -> usize {
        self.to_bytes().len()
    }
}
