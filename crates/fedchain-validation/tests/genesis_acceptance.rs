//! Genesis blocks built from a validated aggregate key are accepted by the
//! block checks under the same chain parameters, and only those.

use fedchain_consensus::ChainParams;
use fedchain_core::block::{Block, BlockHeader};
use fedchain_core::constants::BLOCK_VERSION;
use fedchain_core::error::BlockCheckError;
use fedchain_core::transaction::{pay_to_pubkey, Transaction, TxOut};
use fedchain_core::types::{BlockHash, Network, Timestamp};
use fedchain_crypto::{
    block_hash, merkle_root, parse_aggregate_pubkey, sign_digest, tx_id, FederationKey,
};
use fedchain_genesis::build_genesis_block;
use fedchain_testkit::{concat_pubkeys, TestContext, TEST_EPOCH};
use fedchain_validation::{check_block, CheckOptions};

const SECRET: &str = "dbb9d19637018267268dfc2cc7aec07e7217c1a2d6733e1184a0909273bf078b";

/// Fifteen valid compressed keys whose sum is a valid point.
const FIFTEEN_KEYS: &str = "03af80b90d25145da28c583359beb47b21796b2fe1a23c1511e443e7a64dfdb27d02ce7edc292d7b747fab2f23584bbafaffde5c8ff17cf689969614441e0527b90002785a891f323acd6cef0fc509bb14304410595914267c50467e51c87142acbb5e02396c2c8a22ec28dbe02613027edea9a3b0c314294985e09c2f389818b29fee0603e67ceb1f0af0ab4668227984782b48d286b88e54dc91487143199728d4597c02023b435ce7b804aa66dcd65a855282479be5057fd82ce4c7c2e2430920de8b9e9e0205deb5ba6b1f7c22e79026f8301fe8d50e9e9af8514665c2440207e932d44a620201c537fd7eb7928700927b48e51ceec621fc8ba1177ee2ad67336ed91e2f63a1033e6e1d4ae3e7e1bc2173e2af1f2f65c6284ea7c6478f2241784c77b0dff98e6102114e7960286099c603e51348df63fd0acb75f81b97a85eb4af87df9ee5ff18eb03831a69b8009833ab5b0326012eaf489bfea35a7321b1ca15b11d88131423fafc02bf2027c8455800c7626542219e6208b5fe787483689f1391d6d443ec85673ecf03b44f1cfcf46aba8bc98e2fd39f137cc43d98ab7792e4848b09c06198b042ca8b02b9a609d6bec0fdc9ba690986013cf7bbd13c54ffc25e6cf30916b4732c4a952a02e78cafe033b22bda5d7d1c8e82ee932930bf12e08489bc19769cbec765568be9";

#[test]
fn signed_genesis_from_known_key_is_accepted() {
    let key = FederationKey::from_hex(SECRET).unwrap();
    let pubkey = key.public_key_hex();
    assert_eq!(pubkey, "03831a69b8009833ab5b0326012eaf489bfea35a7321b1ca15b11d88131423fafc");

    for network in [Network::Main, Network::Test, Network::Regtest] {
        let params = ChainParams::new(network, &pubkey, Some(&key)).unwrap();
        assert!(params.genesis().header.proof.is_some());
        assert_eq!(check_block(params.genesis(), &params, CheckOptions::default()), Ok(()));
    }
}

#[test]
fn genesis_is_reproducible_outside_chain_params() {
    let key = FederationKey::from_hex(SECRET).unwrap();
    let params = ChainParams::new(Network::Test, &key.public_key_hex(), Some(&key)).unwrap();

    let rebuilt = build_genesis_block(params.aggregate_pubkey(), Some(&key), Network::Test).unwrap();
    assert_eq!(&rebuilt, params.genesis());
    assert_eq!(block_hash(&rebuilt.header), *params.genesis_hash());
}

#[test]
fn genesis_rejected_under_another_federation() {
    let key = FederationKey::from_hex(SECRET).unwrap();
    let ours = ChainParams::new(Network::Main, &key.public_key_hex(), Some(&key)).unwrap();

    let mut ctx = TestContext::new(0xfed);
    let other_keys = ctx.federation_keys(3);
    let theirs = ChainParams::new(Network::Main, &concat_pubkeys(&other_keys), None).unwrap();

    assert_eq!(
        check_block(ours.genesis(), &theirs, CheckOptions::default()),
        Err(BlockCheckError::BadProof)
    );
}

#[test]
fn unsigned_genesis_needs_proof_check_disabled() {
    let aggregate = parse_aggregate_pubkey(FIFTEEN_KEYS).unwrap();
    assert_eq!(
        aggregate.to_hex(),
        "02d7bbe714a08f73b17a3e5dcbca523470e9de5ee6c92f396beb954b8a2cdf4388"
    );

    let params = ChainParams::new(Network::Main, FIFTEEN_KEYS, None).unwrap();
    assert_eq!(
        check_block(params.genesis(), &params, CheckOptions::default()),
        Err(BlockCheckError::MissingProof)
    );
    let structural = CheckOptions { check_proof: false, ..CheckOptions::default() };
    assert_eq!(check_block(params.genesis(), &params, structural), Ok(()));
}

#[test]
fn federation_combined_key_signs_accepted_genesis() {
    let mut ctx = TestContext::new(0xc0de);
    let members = ctx.federation_keys(15);
    let combined = FederationKey::combine(&members).unwrap();

    let params = ChainParams::new(Network::Regtest, &concat_pubkeys(&members), Some(&combined)).unwrap();
    assert_eq!(params.aggregate_pubkey().to_compressed(), combined.public_key());
    assert_eq!(check_block(params.genesis(), &params, CheckOptions::default()), Ok(()));
}

/// A one-coinbase block at `height` on top of `prev`, signed by `signer`.
fn next_block(
    prev: BlockHash,
    height: u64,
    timestamp: Timestamp,
    signer: &FederationKey,
) -> Block {
    let coinbase = Transaction::coinbase(
        height,
        height.to_le_bytes().to_vec(),
        vec![TxOut { value: 50, script_pubkey: pay_to_pubkey(&signer.public_key()) }],
    );
    let mut header = BlockHeader {
        version: BLOCK_VERSION,
        prev_hash: prev,
        merkle_root: merkle_root(&[tx_id(&coinbase)]).0,
        timestamp,
        proof: None,
    };
    header.proof = Some(sign_digest(signer, block_hash(&header).as_bytes()).unwrap());
    Block { header, transactions: vec![coinbase] }
}

#[test]
fn blocks_after_genesis_are_accepted_at_block_spacing() {
    let key = FederationKey::from_hex(SECRET).unwrap();
    let params = ChainParams::new(Network::Regtest, &key.public_key_hex(), Some(&key)).unwrap();
    let spacing = i64::from(params.consensus().target_block_spacing_secs);

    let mut ctx = TestContext::new(0xb10c);
    assert_eq!(ctx.now(), TEST_EPOCH);

    let mut prev = *params.genesis_hash();
    let mut timestamps = Vec::new();
    for height in 1..=3 {
        let block = next_block(prev, height, ctx.advance(spacing), &key);
        assert!(!block.is_genesis());
        assert_eq!(check_block(&block, &params, CheckOptions::default()), Ok(()));
        timestamps.push(block.header.timestamp);
        prev = block_hash(&block.header);
    }
    assert_eq!(
        timestamps,
        vec![TEST_EPOCH + spacing, TEST_EPOCH + 2 * spacing, TEST_EPOCH + 3 * spacing]
    );

    // A block signed by any other key is refused.
    let stranger = FederationKey::from_bytes(&[0x42; 32]).unwrap();
    let forged = next_block(prev, 4, ctx.advance(spacing), &stranger);
    assert_eq!(
        check_block(&forged, &params, CheckOptions::default()),
        Err(BlockCheckError::BadProof)
    );
}
