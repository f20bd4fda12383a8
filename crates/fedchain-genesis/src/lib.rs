//! fedchain-genesis
//!
//! Builds the height-0 block from the validated aggregate public key.
//!
//! The genesis block holds a single coinbase transaction paying the genesis
//! reward to `<aggregate key> OP_CHECKSIG`, and a header whose `proof` field
//! takes the place of proof-of-work: a signature by the aggregate key over the
//! header body. The proof is only present when a signer is supplied.

pub mod params;

pub use params::GenesisParams;

use fedchain_core::block::{Block, BlockHeader};
use fedchain_core::transaction::{pay_to_pubkey, Transaction, TxOut};
use fedchain_core::types::{BlockHash, Network};
use fedchain_crypto::{block_hash, merkle_root, sign_digest, tx_id};
use fedchain_crypto::{AggregatePublicKey, FederationKey, SignatureError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("genesis signer {signer} does not match aggregate public key {aggregate}")]
    SignerMismatch { signer: String, aggregate: String },

    #[error("signing genesis header: {0}")]
    Signing(#[from] SignatureError),
}

/// Builder for the genesis block of one network.
///
/// The signer is the bootstrap path: a single key, or the combination of the
/// members' keys (`FederationKey::combine`), whose public key equals the
/// aggregate key.
pub struct GenesisBuilder<'a> {
    params: GenesisParams,
    signer: Option<&'a FederationKey>,
}

impl<'a> GenesisBuilder<'a> {
    pub fn new(params: GenesisParams) -> Self {
        Self { params, signer: None }
    }

    pub fn for_network(network: Network) -> Self {
        Self::new(GenesisParams::for_network(network))
    }

    pub fn with_signer(mut self, signer: &'a FederationKey) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the block. Identical params, aggregate key and signer always
    /// give a byte-identical block.
    pub fn build(&self, aggregate: &AggregatePublicKey) -> Result<Block, GenesisError> {
        let coinbase = genesis_coinbase(aggregate, &self.params);
        let (merkle_root, _) = merkle_root(&[tx_id(&coinbase)]);

        let mut header = BlockHeader {
            version: self.params.version,
            prev_hash: BlockHash::ZERO,
            merkle_root,
            timestamp: self.params.timestamp,
            proof: None,
        };

        let hash = block_hash(&header);
        if let Some(signer) = self.signer {
            if signer.public_key() != aggregate.to_compressed() {
                return Err(GenesisError::SignerMismatch {
                    signer: signer.public_key_hex(),
                    aggregate: aggregate.to_hex(),
                });
            }
            header.proof = Some(sign_digest(signer, hash.as_bytes())?);
        }

        info!(
            network = %self.params.network,
            hash = %hash,
            signed = header.proof.is_some(),
            "genesis block built"
        );

        Ok(Block {
            header,
            transactions: vec![coinbase],
        })
    }
}

/// The genesis coinbase: height 0, bootstrap message, one output to the
/// aggregate key.
pub fn genesis_coinbase(aggregate: &AggregatePublicKey, params: &GenesisParams) -> Transaction {
    Transaction::coinbase(
        0,
        params.coinbase_message.as_bytes().to_vec(),
        vec![TxOut {
            value: params.reward,
            script_pubkey: pay_to_pubkey(&aggregate.to_compressed()),
        }],
    )
}

/// Build `network`'s genesis block, optionally signed.
pub fn build_genesis_block(
    aggregate: &AggregatePublicKey,
    signer: Option<&FederationKey>,
    network: Network,
) -> Result<Block, GenesisError> {
    let mut builder = GenesisBuilder::for_network(network);
    if let Some(signer) = signer {
        builder = builder.with_signer(signer);
    }
    builder.build(aggregate)
}
