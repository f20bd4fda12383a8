use std::collections::HashSet;

use fedchain_consensus::{ChainParams, ConsensusParams};
use fedchain_core::block::Block;
use fedchain_core::constants::{
    COINBASE_SCRIPT_SIG_MAX_LEN, COINBASE_SCRIPT_SIG_MIN_LEN, MAX_MONEY,
};
use fedchain_core::error::BlockCheckError;
use fedchain_core::transaction::{Transaction, TxIn};
use fedchain_crypto::{block_hash, merkle_root, tx_id, verify_digest};
use tracing::debug;

/// Which of the expensive checks `check_block` performs.
///
/// Callers that have already verified a block's proof or merkle root (a block
/// they built themselves, say) may skip re-checking them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub check_proof: bool,
    pub check_merkle_root: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            check_proof: true,
            check_merkle_root: true,
        }
    }
}

/// Context-free acceptance checks for a block under `params`.
///
/// Checks (in order):
/// 1. Proof present and signed by the aggregate public key
/// 2. Merkle root matches and the transaction list is not mutated
/// 3. Non-empty, within the block size limit
/// 4. Exactly one coinbase, in first position
/// 5. Genesis blocks: a single height-0 coinbase
/// 6. Every transaction passes `check_transaction`
///
/// UTXO, script and timestamp checks belong to chain state, not here.
pub fn check_block(
    block: &Block,
    params: &ChainParams,
    options: CheckOptions,
) -> Result<(), BlockCheckError> {
    let hash = block_hash(&block.header);

    // ── 1. Authorization ─────────────────────────────────────────────────────
    if options.check_proof {
        let proof = block
            .header
            .proof
            .as_ref()
            .ok_or(BlockCheckError::MissingProof)?;
        verify_digest(params.aggregate_pubkey(), hash.as_bytes(), proof)
            .map_err(|_| BlockCheckError::BadProof)?;
    }

    // ── 2. Merkle root ───────────────────────────────────────────────────────
    if options.check_merkle_root {
        let ids: Vec<_> = block.transactions.iter().map(tx_id).collect();
        let (root, mutated) = merkle_root(&ids);
        if root != block.header.merkle_root {
            return Err(BlockCheckError::BadMerkleRoot);
        }
        if mutated {
            return Err(BlockCheckError::DuplicateTransaction);
        }
    }

    // ── 3. Size ──────────────────────────────────────────────────────────────
    let consensus = params.consensus();
    if block.transactions.is_empty() {
        return Err(BlockCheckError::NoTransactions);
    }
    let size = block.serialized_size();
    if size > consensus.max_block_size {
        return Err(BlockCheckError::BlockTooLarge {
            size,
            max: consensus.max_block_size,
        });
    }

    // ── 4. Coinbase placement ────────────────────────────────────────────────
    if !block.transactions[0].is_coinbase() {
        return Err(BlockCheckError::FirstTxNotCoinbase);
    }
    if block.transactions[1..].iter().any(Transaction::is_coinbase) {
        return Err(BlockCheckError::MultipleCoinbase);
    }

    // ── 5. Genesis shape ─────────────────────────────────────────────────────
    if block.is_genesis() {
        if block.transactions.len() != 1 {
            return Err(BlockCheckError::GenesisTxCount {
                got: block.transactions.len(),
            });
        }
        match block.transactions[0].coinbase_height() {
            Some(0) | None => {}
            Some(got) => return Err(BlockCheckError::GenesisHeight { got }),
        }
    }

    // ── 6. Transactions ──────────────────────────────────────────────────────
    for tx in &block.transactions {
        check_transaction(tx, consensus)?;
    }

    debug!(hash = %hash, txs = block.transactions.len(), size, "block passed checks");
    Ok(())
}

/// Context-free checks for a single transaction.
pub fn check_transaction(
    tx: &Transaction,
    consensus: &ConsensusParams,
) -> Result<(), BlockCheckError> {
    if tx.inputs.is_empty() {
        return Err(BlockCheckError::EmptyInputs);
    }
    if tx.outputs.is_empty() {
        return Err(BlockCheckError::EmptyOutputs);
    }

    let size = tx.serialized_size();
    if size > consensus.max_tx_size {
        return Err(BlockCheckError::TxTooLarge {
            size,
            max: consensus.max_tx_size,
        });
    }

    let mut total: u64 = 0;
    for out in &tx.outputs {
        if out.value > MAX_MONEY {
            return Err(BlockCheckError::OutputValueOutOfRange { value: out.value });
        }
        total = total
            .checked_add(out.value)
            .filter(|t| *t <= MAX_MONEY)
            .ok_or(BlockCheckError::TotalOutputOutOfRange)?;
    }

    if tx.is_coinbase() {
        if let [TxIn::Coinbase { script_sig, .. }] = tx.inputs.as_slice() {
            let len = script_sig.len();
            if !(COINBASE_SCRIPT_SIG_MIN_LEN..=COINBASE_SCRIPT_SIG_MAX_LEN).contains(&len) {
                return Err(BlockCheckError::BadCoinbaseScriptLength { len });
            }
        }
        return Ok(());
    }

    let mut seen = HashSet::with_capacity(tx.inputs.len());
    for input in &tx.inputs {
        match input {
            // A coinbase input outside a coinbase transaction spends nothing.
            TxIn::Coinbase { .. } => return Err(BlockCheckError::NullPrevOut),
            TxIn::Spend { prev_out, .. } => {
                if prev_out.is_null() {
                    return Err(BlockCheckError::NullPrevOut);
                }
                if !seen.insert(*prev_out) {
                    return Err(BlockCheckError::DuplicateInputs);
                }
            }
        }
    }

    Ok(())
}
