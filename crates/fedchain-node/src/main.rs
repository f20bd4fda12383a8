//! fedchain-node: chain parameter initialization for a federated node.
//!
//! Startup sequence:
//!   1. Resolve configuration (`--conf` JSON, then command-line overrides)
//!   2. Validate the federation's aggregate public key and select chain params
//!   3. Check the genesis block against the selected params
//!   4. Print a JSON summary of the selected chain to stdout
//!
//! Any key validation failure aborts startup with the exact validation
//! message and a non-zero exit status.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use fedchain_consensus::select_params;
use fedchain_core::types::Network;
use fedchain_crypto::{AggregatePublicKey, FederationKey};
use fedchain_validation::{check_block, CheckOptions};

use crate::config::NodeConfig;

#[derive(Parser, Debug)]
#[command(
    name = "fedchain-node",
    version,
    about = "fedchain node: blocks signed by a federation's aggregate key"
)]
struct Args {
    /// Network to run: main, test or regtest.
    #[arg(long)]
    chain: Option<Network>,

    /// Concatenated compressed public keys of the federation (hex).
    #[arg(long)]
    signblockpubkey: Option<String>,

    /// Path to a JSON config file. Command-line flags take precedence.
    #[arg(long)]
    conf: Option<PathBuf>,

    /// Secret key (hex) that signs the genesis block. Development only.
    #[arg(long)]
    genesis_key: Option<String>,
}

#[derive(Serialize)]
struct StartupSummary<'a> {
    network: Network,
    aggregate_pubkey: &'a AggregatePublicKey,
    genesis_hash: String,
    genesis_signed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,fedchain=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("fedchain node starting");

    // ── Configuration ─────────────────────────────────────────────────────────
    let file = match &args.conf {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig::default(),
    };
    let settings = file.merge(NodeConfig {
        chain: args.chain,
        signblockpubkey: args.signblockpubkey,
        genesis_key: args.genesis_key,
    });

    let signer = settings
        .genesis_key
        .as_deref()
        .map(|hex| FederationKey::from_hex(hex).context("parsing genesis key"))
        .transpose()?;
    if signer.is_some() {
        warn!("signing genesis with a key from configuration; DO NOT USE IN PRODUCTION");
    }

    // ── Chain parameters ──────────────────────────────────────────────────────
    // No context here: the validation message must reach the operator as is.
    let params = select_params(settings.network, &settings.sign_block_pubkey, signer.as_ref())?;

    // ── Genesis acceptance ────────────────────────────────────────────────────
    let genesis_signed = params.genesis().header.proof.is_some();
    let options = CheckOptions {
        check_proof: genesis_signed,
        ..CheckOptions::default()
    };
    check_block(params.genesis(), params, options).context("genesis block failed checks")?;
    if !genesis_signed {
        warn!("genesis block is unsigned; pass --genesis-key to sign it");
    }

    let summary = StartupSummary {
        network: params.network(),
        aggregate_pubkey: params.aggregate_pubkey(),
        genesis_hash: params.genesis_hash().to_hex(),
        genesis_signed,
    };
    println!("{}", serde_json::to_string(&summary)?);

    info!(network = %params.network(), genesis_hash = %params.genesis_hash(), "node ready");
    Ok(())
}
