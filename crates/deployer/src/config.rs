//! Deployment configuration.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// First well-known Anvil dev account key, used by the test config.
const ANVIL_DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn default_confirmation_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_confirmations() -> u64 {
    1
}

/// Explicit deployment context: where to deploy, who signs, and how long to
/// wait for the deployment transaction to confirm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// JSON-RPC endpoint of the target chain.
    pub rpc_url: String,

    /// Hex-encoded private key of the deploying account. May be omitted in
    /// the file and supplied on the command line instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer_key: Option<String>,

    /// Maximum time to wait for the deployment transaction to confirm.
    #[serde(with = "humantime_serde", default = "default_confirmation_timeout")]
    pub confirmation_timeout: Duration,

    /// Confirmations required before the deployment counts as final.
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
}

impl DeployConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configuration pointing at a local dev node, signing with the first
    /// Anvil dev key.
    pub fn default_test_config() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            deployer_key: Some(ANVIL_DEV_KEY.to_string()),
            confirmation_timeout: default_confirmation_timeout(),
            confirmations: default_confirmations(),
        }
    }
}
