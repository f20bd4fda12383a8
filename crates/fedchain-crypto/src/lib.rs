//! fedchain-crypto
//!
//! secp256k1 key handling for the federation root: hex codec for concatenated
//! public keys, EC-sum aggregation into the aggregate public key, block proof
//! signing and verification, and BLAKE3 hashing of chain objects.

pub mod aggregate;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod pubkey;

pub use aggregate::{aggregate_pubkeys, parse_aggregate_pubkey, AggregatePublicKey};
pub use ecdsa::{sign_digest, verify_digest};
pub use error::{KeyError, MalformedReason, SignatureError};
pub use hash::{block_hash, blake3_hash, merkle_root, tx_id};
pub use keypair::FederationKey;
pub use pubkey::{decode_pubkeys, KeyFormat, PublicKeyRecord};
