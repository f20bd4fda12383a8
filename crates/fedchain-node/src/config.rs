//! Node configuration: an optional JSON file, overridden field by field by
//! command-line flags.

use std::path::Path;

use anyhow::Context;
use fedchain_core::types::Network;
use serde::{Deserialize, Serialize};

/// Contents of the `--conf` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub chain: Option<Network>,
    /// Concatenated compressed public keys of the federation, in hex.
    pub signblockpubkey: Option<String>,
    /// Secret key that signs the genesis block. Development only.
    pub genesis_key: Option<String>,
}

impl NodeConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing config JSON in {}", path.display()))
    }

    /// Apply command-line values on top of this file's values.
    pub fn merge(self, overrides: NodeConfig) -> Settings {
        Settings {
            network: overrides.chain.or(self.chain).unwrap_or(Network::Main),
            // An absent key is the empty configuration, which never validates.
            sign_block_pubkey: overrides
                .signblockpubkey
                .or(self.signblockpubkey)
                .unwrap_or_default(),
            genesis_key: overrides.genesis_key.or(self.genesis_key),
        }
    }
}

/// Fully resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub network: Network,
    pub sign_block_pubkey: String,
    pub genesis_key: Option<String>,
}
