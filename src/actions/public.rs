//! Read-only state queries

use primitive_types::U256;
use serde_json::json;
use tracing::debug;

use super::quantity;
use crate::chain::assert_current_chain;
use crate::client::Client;
use crate::error::Result;
use crate::hex::{hex_to_number, hex_to_u256};
use crate::types::{Address, BlockSelector};

/// Parameters for [`get_transaction_count`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionCountParameters {
    /// The account address
    pub address: Address,
    /// Block to query, `latest` by default
    pub block: BlockSelector,
}

impl GetTransactionCountParameters {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            block: BlockSelector::default(),
        }
    }

    pub fn at(mut self, block: impl Into<BlockSelector>) -> Self {
        self.block = block.into();
        self
    }
}

/// Number of transactions `address` has sent, as of the selected block
///
/// JSON-RPC: `eth_getTransactionCount [address, block]`
pub async fn get_transaction_count<C: Client + ?Sized>(
    client: &C,
    params: &GetTransactionCountParameters,
) -> Result<u64> {
    let method = "eth_getTransactionCount";
    let raw = client
        .transport()
        .request(
            method,
            vec![json!(params.address), json!(params.block.to_rpc_param())],
        )
        .await?;

    let count = hex_to_number(quantity(method, &raw)?)?;
    debug!(address = %params.address, count, "Fetched transaction count");
    Ok(count)
}

/// Parameters for [`get_balance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBalanceParameters {
    pub address: Address,
    pub block: BlockSelector,
}

impl GetBalanceParameters {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            block: BlockSelector::default(),
        }
    }

    pub fn at(mut self, block: impl Into<BlockSelector>) -> Self {
        self.block = block.into();
        self
    }
}

/// Balance of `address` in wei
///
/// JSON-RPC: `eth_getBalance [address, block]`
pub async fn get_balance<C: Client + ?Sized>(
    client: &C,
    params: &GetBalanceParameters,
) -> Result<U256> {
    let method = "eth_getBalance";
    let raw = client
        .transport()
        .request(
            method,
            vec![json!(params.address), json!(params.block.to_rpc_param())],
        )
        .await?;

    Ok(hex_to_u256(quantity(method, &raw)?)?)
}

/// Height of the most recent block
pub async fn get_block_number<C: Client + ?Sized>(client: &C) -> Result<u64> {
    let method = "eth_blockNumber";
    let raw = client.transport().request(method, vec![]).await?;
    Ok(hex_to_number(quantity(method, &raw)?)?)
}

/// Chain id reported by the node
pub async fn get_chain_id<C: Client + ?Sized>(client: &C) -> Result<u64> {
    let method = "eth_chainId";
    let raw = client.transport().request(method, vec![]).await?;
    Ok(hex_to_number(quantity(method, &raw)?)?)
}

/// Fail unless the client is bound to a chain and the node is on that chain
pub async fn assert_chain<C: Client + ?Sized>(client: &C) -> Result<()> {
    let current = get_chain_id(client).await?;
    assert_current_chain(client.chain(), current)?;
    Ok(())
}
