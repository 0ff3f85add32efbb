//! Error types for the Ethereum action layer

use thiserror::Error;

use crate::chain_error::ChainError;
use crate::hex::HexError;
use crate::types::ParamsError;

/// Failures of the JSON-RPC transport and the node behind it
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON-RPC error: code={code}, message={message}")]
    JsonRpcError { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Any error an action can return
#[derive(Error, Debug)]
pub enum Error {
    /// Passed through from the transport untouched
    #[error(transparent)]
    Transport(#[from] RpcError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Failed to decode result: {0}")]
    Hex(#[from] HexError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

impl Error {
    /// The transport error, if this came from the transport
    pub fn as_transport(&self) -> Option<&RpcError> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// The chain error, if this came from a chain/config check
    pub fn as_chain(&self) -> Option<&ChainError> {
        match self {
            Error::Chain(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
