//! Client configuration from the environment

use std::time::Duration;
use thiserror::Error;

use crate::chain::validate_chain_id;
use crate::chain_error::ChainError;
use crate::client::{TestClientMode, UnknownModeError};

const DEFAULT_RPC_ENDPOINT: &str = "http://127.0.0.1:8545";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error(transparent)]
    Mode(#[from] UnknownModeError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the node
    pub rpc_endpoint: String,
    /// Test node flavour used for `{mode}_*` methods
    pub mode: TestClientMode,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Chain the node is expected to be on, if pinned
    pub chain_id: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_endpoint: DEFAULT_RPC_ENDPOINT.to_string(),
            mode: TestClientMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            chain_id: None,
        }
    }
}

impl ClientConfig {
    /// Read `ETH_RPC_ENDPOINT`, `TEST_CLIENT_MODE`, `RPC_TIMEOUT_SECS` and `CHAIN_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ClientConfig::from_env`], with variables read through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("ETH_RPC_ENDPOINT") {
            config.rpc_endpoint = endpoint;
        }

        if let Some(mode) = lookup("TEST_CLIENT_MODE") {
            config.mode = mode.parse()?;
        }

        if let Some(timeout) = lookup("RPC_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|e| ConfigError::InvalidValue {
                var: "RPC_TIMEOUT_SECS",
                reason: format!("{}", e),
            })?;
        }

        if let Some(chain_id) = lookup("CHAIN_ID") {
            let parsed: i64 = chain_id.parse().map_err(|e: std::num::ParseIntError| {
                ChainError::invalid_chain_id(&chain_id).with_cause(e)
            })?;
            config.chain_id = Some(validate_chain_id(parsed)?);
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
