use serde::{Deserialize, Serialize};

use crate::constants::{COMPRESSED_PUBKEY_LEN, OP_CHECKSIG, TX_VERSION};
use crate::types::{Amount, Height, TxId};

// ── OutPoint ──────────────────────────────────────────────────────────────────

/// Reference to a previous transaction output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: TxId,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint no real output can have. Only meaningful for coinbase.
    pub fn null() -> Self {
        Self {
            txid: TxId::from_bytes([0u8; 32]),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }
}

// ── TxIn ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxIn {
    /// Creates new coins. Only valid as the sole input of a block's first
    /// transaction.
    Coinbase {
        /// Height of the block this coinbase belongs to (genesis = 0).
        height: Height,
        /// Free-form bytes; the genesis coinbase carries the network's
        /// bootstrap message here.
        script_sig: Vec<u8>,
    },
    /// Spends an existing output.
    Spend {
        prev_out: OutPoint,
        script_sig: Vec<u8>,
    },
}

// ── TxOut ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Vec<u8>,
}

// ── Transaction ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// A coinbase transaction with one input and the given outputs.
    pub fn coinbase(height: Height, script_sig: Vec<u8>, outputs: Vec<TxOut>) -> Self {
        Self {
            version: TX_VERSION,
            inputs: vec![TxIn::Coinbase { height, script_sig }],
            outputs,
            lock_time: 0,
        }
    }

    /// True if this transaction has exactly one input and it is a coinbase input.
    pub fn is_coinbase(&self) -> bool {
        matches!(self.inputs.as_slice(), [TxIn::Coinbase { .. }])
    }

    /// Height committed to by the coinbase input, if this is a coinbase.
    pub fn coinbase_height(&self) -> Option<Height> {
        match self.inputs.as_slice() {
            [TxIn::Coinbase { height, .. }] => Some(*height),
            _ => None,
        }
    }

    /// Serialize to canonical bytes (bincode).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("transaction serialization is infallible")
    }

    pub fn serialized_size(&self) -> usize {
        self.to_bytes().len()
    }
}

/// `<33-byte pubkey> OP_CHECKSIG` locking script.
pub fn pay_to_pubkey(pubkey: &[u8; COMPRESSED_PUBKEY_LEN]) -> Vec<u8> {
    let mut script = Vec::with_capacity(COMPRESSED_PUBKEY_LEN + 2);
    script.push(COMPRESSED_PUBKEY_LEN as u8);
    script.extend_from_slice(pubkey);
    script.push(OP_CHECKSIG);
    script
}
