use fedchain_core::constants::{BLOCK_VERSION, GENESIS_REWARD};
use fedchain_core::types::{Amount, Network, Timestamp};
use serde::{Deserialize, Serialize};

/// Network constants baked into the genesis block. Together with the
/// aggregate public key they fully determine it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisParams {
    pub network: Network,
    /// Header version.
    pub version: u32,
    pub timestamp: Timestamp,
    /// Bootstrap text carried in the coinbase `script_sig`.
    pub coinbase_message: String,
    /// Value paid to the aggregate key by the coinbase output.
    pub reward: Amount,
}

impl GenesisParams {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            version: BLOCK_VERSION,
            timestamp: network.genesis_timestamp(),
            coinbase_message: network.genesis_message().to_string(),
            reward: GENESIS_REWARD,
        }
    }
}
