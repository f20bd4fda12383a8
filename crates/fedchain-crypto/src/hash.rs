use fedchain_core::block::BlockHeader;
use fedchain_core::transaction::Transaction;
use fedchain_core::types::{BlockHash, MerkleRoot, TxId};

/// Compute BLAKE3 hash of arbitrary bytes → 32-byte array.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// TxId = BLAKE3 of the canonical transaction bytes.
pub fn tx_id(tx: &Transaction) -> TxId {
    TxId::from_bytes(blake3_hash(&tx.to_bytes()))
}

/// Block hash = BLAKE3 of the header body. The proof is not covered, so a
/// block keeps its hash whether or not it has been signed yet.
pub fn block_hash(header: &BlockHeader) -> BlockHash {
    BlockHash::from_bytes(blake3_hash(&header.body_bytes()))
}

fn parent_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut h = blake3::Hasher::new();
    h.update(left);
    h.update(right);
    *h.finalize().as_bytes()
}

/// Merkle root over `ids`, duplicating the last node of odd-length levels.
///
/// The second value is true when some level contains two identical adjacent
/// nodes. Such a list hashes to the same root as a shorter one, so a block
/// whose tree is "mutated" must be rejected even if the root matches.
pub fn merkle_root(ids: &[TxId]) -> (MerkleRoot, bool) {
    if ids.is_empty() {
        return (MerkleRoot([0u8; 32]), false);
    }

    let mut level: Vec<[u8; 32]> = ids.iter().map(|id| id.0).collect();
    let mut mutated = false;
    while level.len() > 1 {
        for pair in level.chunks_exact(2) {
            if pair[0] == pair[1] {
                mutated = true;
            }
        }
        if level.len() % 2 == 1 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        level = level
            .chunks_exact(2)
            .map(|pair| parent_hash(&pair[0], &pair[1]))
            .collect();
    }
    (MerkleRoot(level[0]), mutated)
}
