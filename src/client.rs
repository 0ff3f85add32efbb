//! Client handles that actions borrow

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::chain::Chain;
use crate::error::RpcError;
use crate::transport::Transport;

/// Anything that can carry an action's request to a node
pub trait Client: Send + Sync {
    fn transport(&self) -> &dyn Transport;

    /// Chain the client is bound to, if any
    fn chain(&self) -> Option<&Chain> {
        None
    }
}

/// Read-only access to a node
#[derive(Clone)]
pub struct PublicClient {
    transport: Arc<dyn Transport>,
    chain: Option<Chain>,
}

impl PublicClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            chain: None,
        }
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.transport.request(method, params).await
    }
}

impl Client for PublicClient {
    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }
}

impl fmt::Debug for PublicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicClient")
            .field("chain", &self.chain.as_ref().map(|c| c.id))
            .finish()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown test client mode \"{0}\" (expected anvil, hardhat or ganache)")]
pub struct UnknownModeError(pub String);

/// Which test node implementation the client talks to.
///
/// Its name prefixes the node-specific RPC methods (`anvil_mine`, `hardhat_mine`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestClientMode {
    #[default]
    Anvil,
    Hardhat,
    Ganache,
}

impl TestClientMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestClientMode::Anvil => "anvil",
            TestClientMode::Hardhat => "hardhat",
            TestClientMode::Ganache => "ganache",
        }
    }
}

impl FromStr for TestClientMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anvil" => Ok(TestClientMode::Anvil),
            "hardhat" => Ok(TestClientMode::Hardhat),
            "ganache" => Ok(TestClientMode::Ganache),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

impl fmt::Display for TestClientMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access to a local test node's control methods
#[derive(Clone)]
pub struct TestClient {
    transport: Arc<dyn Transport>,
    mode: TestClientMode,
    chain: Option<Chain>,
}

impl TestClient {
    pub fn new(mode: TestClientMode, transport: impl Transport + 'static) -> Self {
        Self::from_shared(mode, Arc::new(transport))
    }

    pub fn from_shared(mode: TestClientMode, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            mode,
            chain: None,
        }
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn mode(&self) -> TestClientMode {
        self.mode
    }

    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.transport.request(method, params).await
    }
}

impl Client for TestClient {
    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn chain(&self) -> Option<&Chain> {
        self.chain.as_ref()
    }
}

impl fmt::Debug for TestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestClient")
            .field("mode", &self.mode)
            .field("chain", &self.chain.as_ref().map(|c| c.id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    #[test]
    fn test_mode_strings() {
        assert_eq!(TestClientMode::default(), TestClientMode::Anvil);
        assert_eq!("hardhat".parse::<TestClientMode>(), Ok(TestClientMode::Hardhat));
        assert_eq!(TestClientMode::Ganache.to_string(), "ganache");
        assert_eq!(
            "foundry".parse::<TestClientMode>(),
            Err(UnknownModeError("foundry".to_string()))
        );
    }

    #[tokio::test]
    async fn test_clients_share_transport() {
        let mock = Arc::new(MockTransport::new().with_result("eth_chainId", "0x7a69"));
        let public = PublicClient::from_shared(mock.clone()).with_chain(Chain::new(31337, "Anvil"));
        let test = TestClient::from_shared(TestClientMode::Hardhat, mock.clone());

        assert_eq!(public.request("eth_chainId", vec![]).await.unwrap(), json!("0x7a69"));
        assert_eq!(test.request("eth_chainId", vec![]).await.unwrap(), json!("0x7a69"));
        assert_eq!(mock.calls().len(), 2);

        assert_eq!(public.chain().map(|c| c.id), Some(31337));
        assert!(Client::chain(&test).is_none());
        assert_eq!(test.mode(), TestClientMode::Hardhat);
    }
}
