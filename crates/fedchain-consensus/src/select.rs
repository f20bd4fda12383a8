//! Process-wide chain parameter selection.
//!
//! The value is built completely before it is published, and publication is a
//! single `OnceCell::set`. Readers therefore see either nothing or a fully
//! validated `ChainParams`, and at most one selection per process wins.

use fedchain_core::types::Network;
use fedchain_crypto::FederationKey;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::chainparams::{ChainParams, ChainParamsError};

static CHAIN_PARAMS: OnceCell<ChainParams> = OnceCell::new();

/// Build and install the chain parameters for `network`.
///
/// On a validation error nothing is installed and a later call may still
/// succeed. Once a selection has succeeded every further call returns
/// `AlreadySelected`; callers should treat that as fatal.
pub fn select_params(
    network: Network,
    sign_block_pubkey: &str,
    signer: Option<&FederationKey>,
) -> Result<&'static ChainParams, ChainParamsError> {
    let built = ChainParams::new(network, sign_block_pubkey, signer)?;

    if let Err(rejected) = CHAIN_PARAMS.set(built) {
        let active = CHAIN_PARAMS.get().map_or(rejected.network(), |p| p.network());
        warn!(active = %active, requested = %network, "chain parameters already selected");
        return Err(ChainParamsError::AlreadySelected {
            active,
            requested: network,
        });
    }

    let installed = params()?;
    info!(network = %installed.network(), "chain parameters selected");
    Ok(installed)
}

/// The installed chain parameters.
pub fn params() -> Result<&'static ChainParams, ChainParamsError> {
    CHAIN_PARAMS.get().ok_or(ChainParamsError::NotSelected)
}
