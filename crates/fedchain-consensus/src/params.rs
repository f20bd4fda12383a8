use fedchain_core::constants::{
    COINBASE_MATURITY, MAX_BLOCK_SIZE, MAX_TX_SIZE, SUBSIDY_HALVING_INTERVAL,
    TARGET_BLOCK_SPACING_SECS,
};
use fedchain_core::types::Network;
use serde::{Deserialize, Serialize};

/// Consensus limits that vary by network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Serialized block size limit (bytes).
    pub max_block_size: usize,
    /// Serialized transaction size limit (bytes).
    pub max_tx_size: usize,
    pub coinbase_maturity: u32,
    pub subsidy_halving_interval: u32,
    /// Target interval between federation-signed blocks.
    pub target_block_spacing_secs: u32,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            max_block_size: MAX_BLOCK_SIZE,
            max_tx_size: MAX_TX_SIZE,
            coinbase_maturity: COINBASE_MATURITY,
            subsidy_halving_interval: SUBSIDY_HALVING_INTERVAL,
            target_block_spacing_secs: TARGET_BLOCK_SPACING_SECS,
        }
    }
}

impl ConsensusParams {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main | Network::Test => Self::default(),
            // Short halving interval so regtest can exercise subsidy changes.
            Network::Regtest => Self {
                subsidy_halving_interval: 150,
                ..Self::default()
            },
        }
    }
}
