//! Command-line driver for the Ethereum actions
//!
//! Reads its configuration from the environment (and `.env`), then runs
//! one of a few action sequences against the configured node.

use std::sync::Arc;

use eth_actions::actions::public::{self, GetTransactionCountParameters};
use eth_actions::actions::test as test_actions;
use eth_actions::{
    Address, Chain, ClientConfig, HttpTransport, PublicClient, TestClient, Transport,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env()?;
    info!("RPC endpoint: {}", config.rpc_endpoint);
    info!("Test client mode: {}", config.mode);

    let transport: Arc<dyn Transport> =
        Arc::new(HttpTransport::with_timeout(&config.rpc_endpoint, config.timeout())?);

    let mut client = PublicClient::from_shared(transport.clone());
    if let Some(chain_id) = config.chain_id {
        client = client.with_chain(Chain::new(chain_id, format!("chain {}", chain_id)));
        public::assert_chain(&client).await?;
        info!("Node is on expected chain {}", chain_id);
    }

    let address: Option<Address> = std::env::var("ACCOUNT_ADDRESS")
        .ok()
        .map(|a| a.parse())
        .transpose()?;

    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "query".to_string());

    match run_mode.as_str() {
        "impersonate" => {
            let address =
                address.ok_or_else(|| anyhow::anyhow!("ACCOUNT_ADDRESS is required to impersonate"))?;
            let test_client = TestClient::from_shared(config.mode, transport);
            run_impersonation(&test_client, &address).await
        }
        "query" => run_query(&client, address.as_ref()).await,
        other => {
            warn!("Unknown RUN_MODE {:?}, falling back to query", other);
            run_query(&client, address.as_ref()).await
        }
    }
}

/// Print chain state, plus the nonce of `address` when given
async fn run_query(client: &PublicClient, address: Option<&Address>) -> anyhow::Result<()> {
    let chain_id = public::get_chain_id(client).await?;
    let block_number = public::get_block_number(client).await?;
    info!("Chain id: {}, block number: {}", chain_id, block_number);

    if let Some(address) = address {
        let params = GetTransactionCountParameters::new(address.clone());
        let count = public::get_transaction_count(client, &params).await?;
        info!("Transaction count of {}: {}", address, count);
    }

    Ok(())
}

/// Start and stop impersonating `address` on a test node
async fn run_impersonation(client: &TestClient, address: &Address) -> anyhow::Result<()> {
    test_actions::impersonate_account(client, address).await?;
    info!("Impersonating {}", address);

    let count = public::get_transaction_count(
        client,
        &GetTransactionCountParameters::new(address.clone()),
    )
    .await?;
    info!("Impersonated account has sent {} transactions", count);

    test_actions::stop_impersonating_account(client, address).await?;
    info!("Stopped impersonating {}", address);

    Ok(())
}
