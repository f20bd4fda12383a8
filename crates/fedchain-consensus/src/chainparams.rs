use fedchain_core::block::Block;
use fedchain_core::types::{BlockHash, Network};
use fedchain_crypto::{block_hash, parse_aggregate_pubkey, AggregatePublicKey, FederationKey, KeyError};
use fedchain_genesis::{GenesisBuilder, GenesisError};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::params::ConsensusParams;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error("chain parameters already selected for {active}; cannot select {requested}")]
    AlreadySelected { active: Network, requested: Network },

    #[error("chain parameters have not been selected")]
    NotSelected,
}

/// Everything a node needs to know about the chain it runs: network identity,
/// the federation's aggregate public key, consensus limits and the genesis
/// block derived from the key.
///
/// Fields are private and there are no setters; a value is immutable from
/// construction onwards.
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    network: Network,
    aggregate_pubkey: AggregatePublicKey,
    consensus: ConsensusParams,
    genesis: Block,
    genesis_hash: BlockHash,
}

impl ChainParams {
    /// Validate `sign_block_pubkey` (concatenated compressed key hex) and
    /// derive the genesis block. Fails without side effects if the key does
    /// not validate; an empty string never validates.
    ///
    /// `signer`, when given, must control the aggregate key and is used to
    /// sign the genesis header.
    pub fn new(
        network: Network,
        sign_block_pubkey: &str,
        signer: Option<&FederationKey>,
    ) -> Result<Self, ChainParamsError> {
        let aggregate_pubkey = parse_aggregate_pubkey(sign_block_pubkey)?;

        let mut builder = GenesisBuilder::for_network(network);
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        let genesis = builder.build(&aggregate_pubkey)?;
        let genesis_hash = block_hash(&genesis.header);

        info!(
            network = %network,
            aggregate_pubkey = %aggregate_pubkey,
            genesis_hash = %genesis_hash,
            "chain parameters constructed"
        );

        Ok(Self {
            network,
            aggregate_pubkey,
            consensus: ConsensusParams::for_network(network),
            genesis,
            genesis_hash,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn aggregate_pubkey(&self) -> &AggregatePublicKey {
        &self.aggregate_pubkey
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> &BlockHash {
        &self.genesis_hash
    }

    pub fn magic(&self) -> [u8; 4] {
        self.network.magic()
    }

    pub fn default_port(&self) -> u16 {
        self.network.default_port()
    }
}
