use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown network: {0} (expected main, test or regtest)")]
pub struct UnknownNetwork(pub String);

/// Reasons a candidate block fails structural or authorization checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockCheckError {
    // ── Authorization ────────────────────────────────────────────────────────
    #[error("block proof missing")]
    MissingProof,

    #[error("block proof does not verify against the aggregate public key")]
    BadProof,

    // ── Header / merkle ──────────────────────────────────────────────────────
    #[error("merkle root mismatch")]
    BadMerkleRoot,

    #[error("duplicate transaction (mutated merkle tree)")]
    DuplicateTransaction,

    // ── Block shape ──────────────────────────────────────────────────────────
    #[error("block has no transactions")]
    NoTransactions,

    #[error("block size {size} exceeds maximum of {max} bytes")]
    BlockTooLarge { size: usize, max: usize },

    #[error("first transaction is not a coinbase")]
    FirstTxNotCoinbase,

    #[error("more than one coinbase transaction")]
    MultipleCoinbase,

    #[error("genesis block must contain exactly one transaction, got {got}")]
    GenesisTxCount { got: usize },

    #[error("genesis coinbase height must be 0, got {got}")]
    GenesisHeight { got: u64 },

    // ── Transactions ─────────────────────────────────────────────────────────
    #[error("transaction has no inputs")]
    EmptyInputs,

    #[error("transaction has no outputs")]
    EmptyOutputs,

    #[error("transaction size {size} exceeds maximum of {max} bytes")]
    TxTooLarge { size: usize, max: usize },

    #[error("output value {value} out of range")]
    OutputValueOutOfRange { value: u64 },

    #[error("total output value out of range")]
    TotalOutputOutOfRange,

    #[error("duplicate inputs")]
    DuplicateInputs,

    #[error("coinbase script length {len} out of range")]
    BadCoinbaseScriptLength { len: usize },

    #[error("non-coinbase input references the null outpoint")]
    NullPrevOut,
}
