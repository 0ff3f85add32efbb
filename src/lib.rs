//! Typed actions over an Ethereum node's JSON-RPC interface
//!
//! An action borrows a client, turns its typed parameters into a JSON-RPC
//! method and positional params, sends exactly one request through the
//! client's [`Transport`], and decodes the raw reply.

pub mod actions;
pub mod chain;
pub mod chain_error;
pub mod client;
pub mod config;
pub mod error;
pub mod hex;
pub mod rpc_client;
pub mod transport;
pub mod types;

pub use chain::{Chain, ChainContract};
pub use chain_error::{ChainError, ChainErrorKind};
pub use client::{Client, PublicClient, TestClient, TestClientMode};
pub use config::ClientConfig;
pub use error::{Error, Result, RpcError};
pub use hex::{hex_to_number, number_to_hex};
pub use rpc_client::HttpTransport;
pub use transport::{MockTransport, Transport};
pub use types::{Address, BlockSelector, BlockTag};
