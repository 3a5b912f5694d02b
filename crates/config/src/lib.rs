//! Node configuration for the token service.
//!
//! Two settings drive everything: the RPC endpoint of the ledger node and
//! the managed account transactions are sent from. Both can come from a
//! TOML file or from the environment.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable overriding the node endpoint.
pub const ENDPOINT_ENV: &str = "NODE_ENDPOINT";

/// Environment variable overriding the sender account.
pub const FROM_ADDRESS_ENV: &str = "NODE_FROM_ADDRESS";

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the configuration contents
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error parsing an address value
    #[error("Invalid address in {var}: {message}")]
    InvalidAddress { var: &'static str, message: String },
}

/// Connection settings for the ledger node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// RPC endpoint of the node.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Account the node signs transactions with. The node manages the key;
    /// no key material is handled here.
    #[serde(default)]
    pub from_address: Address,
}

fn default_endpoint() -> String {
    "http://localhost:8545".to_owned()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            from_address: Address::ZERO,
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Build configuration from `NODE_ENDPOINT` and `NODE_FROM_ADDRESS`,
    /// with defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Ok(from) = std::env::var(FROM_ADDRESS_ENV) {
            config.from_address =
                from.parse::<Address>()
                    .map_err(|e| ConfigError::InvalidAddress {
                        var: FROM_ADDRESS_ENV,
                        message: e.to_string(),
                    })?;
        }
        Ok(config)
    }
}
