/// ─── fedchain Protocol Constants ────────────────────────────────────────────
///
/// Blocks are authorized by the federation's aggregate public key instead of
/// proof-of-work. Everything in this file is consensus-critical.

// ── Money ────────────────────────────────────────────────────────────────────

/// 1 coin expressed in base units.
pub const COIN: u64 = 100_000_000;

/// Upper bound on any single output and on the sum of a transaction's outputs.
pub const MAX_MONEY: u64 = 21_000_000 * COIN;

/// Value of the single output in every network's genesis coinbase.
pub const GENESIS_REWARD: u64 = 50 * COIN;

// ── Versions ─────────────────────────────────────────────────────────────────

pub const BLOCK_VERSION: u32 = 1;
pub const TX_VERSION: u32 = 1;

// ── Public key encodings (SEC1) ──────────────────────────────────────────────

pub const COMPRESSED_PUBKEY_LEN: usize = 33;
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Leading byte of a compressed key with an even y coordinate.
pub const PUBKEY_PREFIX_EVEN: u8 = 0x02;
/// Leading byte of a compressed key with an odd y coordinate.
pub const PUBKEY_PREFIX_ODD: u8 = 0x03;
pub const PUBKEY_PREFIX_UNCOMPRESSED: u8 = 0x04;

// ── Script ───────────────────────────────────────────────────────────────────

pub const OP_CHECKSIG: u8 = 0xac;

/// Coinbase `script_sig` length bounds (bytes, inclusive).
pub const COINBASE_SCRIPT_SIG_MIN_LEN: usize = 2;
pub const COINBASE_SCRIPT_SIG_MAX_LEN: usize = 100;

// ── Consensus defaults ───────────────────────────────────────────────────────

/// Serialized block size limit (bytes).
pub const MAX_BLOCK_SIZE: usize = 1_000_000;

/// Serialized transaction size limit (bytes).
pub const MAX_TX_SIZE: usize = 100_000;

/// Blocks before a coinbase output may be spent.
pub const COINBASE_MATURITY: u32 = 100;

pub const SUBSIDY_HALVING_INTERVAL: u32 = 210_000;

/// Target interval between federation-signed blocks (seconds).
pub const TARGET_BLOCK_SPACING_SECS: u32 = 15;

// ── Genesis timestamps (Unix seconds UTC) ────────────────────────────────────

/// 2019-01-01 00:00:00 UTC
pub const GENESIS_TIMESTAMP_MAIN: i64 = 1_546_300_800;

/// 2019-02-01 00:00:00 UTC
pub const GENESIS_TIMESTAMP_TEST: i64 = 1_548_979_200;

pub const GENESIS_TIMESTAMP_REGTEST: i64 = 1_296_688_602;

// ── Genesis coinbase messages ────────────────────────────────────────────────

pub const GENESIS_MESSAGE_MAIN: &str = "fedchain main: blocks signed by the federation, not mined";
pub const GENESIS_MESSAGE_TEST: &str = "fedchain test: blocks signed by the federation, not mined";
pub const GENESIS_MESSAGE_REGTEST: &str = "fedchain regtest";

// ── Network identity ─────────────────────────────────────────────────────────

pub const MAGIC_MAIN: [u8; 4] = [0x01, 0xff, 0xf0, 0x00];
pub const MAGIC_TEST: [u8; 4] = [0x75, 0x9a, 0x83, 0x74];
pub const MAGIC_REGTEST: [u8; 4] = [0x73, 0x9a, 0x97, 0x74];

pub const DEFAULT_PORT_MAIN: u16 = 2357;
pub const DEFAULT_PORT_TEST: u16 = 12357;
pub const DEFAULT_PORT_REGTEST: u16 = 12383;
