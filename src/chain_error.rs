//! Chain and configuration errors
//!
//! Every error here shares one shape: a stable [`ChainErrorKind`] for
//! matching, a short message rendered at construction, supplementary
//! meta lines, and an optional cause.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::chain::{Chain, ChainContract};

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Closed set of chain error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainErrorKind {
    ContractNotSupported,
    ChainMismatch,
    ChainNotFound,
    InvalidChainId,
}

impl ChainErrorKind {
    /// Stable identifier, safe to match on across versions
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainErrorKind::ContractNotSupported => "ChainDoesNotSupportContract",
            ChainErrorKind::ChainMismatch => "ChainMismatchError",
            ChainErrorKind::ChainNotFound => "ChainNotFoundError",
            ChainErrorKind::InvalidChainId => "InvalidChainIdError",
        }
    }
}

impl fmt::Display for ChainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("{short_message}{}", render_meta(.meta_messages))]
pub struct ChainError {
    kind: ChainErrorKind,
    short_message: String,
    meta_messages: Vec<String>,
    #[source]
    cause: Option<Cause>,
}

/// Meta lines as appended to the short message: a blank line, then one per line
fn render_meta(meta_messages: &[String]) -> String {
    if meta_messages.is_empty() {
        String::new()
    } else {
        format!("\n\n{}", meta_messages.join("\n"))
    }
}

impl ChainError {
    fn new(kind: ChainErrorKind, short_message: String, meta_messages: Vec<String>) -> Self {
        Self {
            kind,
            short_message,
            meta_messages,
            cause: None,
        }
    }

    /// The chain has no such contract, or the contract did not exist yet at `block_number`.
    pub fn contract_not_supported(
        chain: &Chain,
        contract_name: &str,
        contract: Option<&ChainContract>,
        block_number: Option<u64>,
    ) -> Self {
        let deployed_later = match (block_number, contract.and_then(|c| c.block_created)) {
            (Some(block), Some(created)) if created > block => Some((created, block)),
            _ => None,
        };

        let reason = match deployed_later {
            Some((created, block)) => format!(
                "- The contract \"{}\" was not deployed until block {} (current block {}).",
                contract_name, created, block
            ),
            None => format!(
                "- The chain does not have the contract \"{}\" configured.",
                contract_name
            ),
        };

        Self::new(
            ChainErrorKind::ContractNotSupported,
            format!(
                "Chain \"{}\" does not support contract \"{}\".",
                chain.name, contract_name
            ),
            vec!["This could be due to any of the following:".to_string(), reason],
        )
    }

    pub fn chain_mismatch(chain: &Chain, current_chain_id: u64) -> Self {
        Self::new(
            ChainErrorKind::ChainMismatch,
            format!(
                "The current chain of the wallet (id: {}) does not match the target chain for the transaction (id: {} – {}).",
                current_chain_id, chain.id, chain.name
            ),
            vec![
                format!("Current Chain ID:  {}", current_chain_id),
                format!("Expected Chain ID: {} – {}", chain.id, chain.name),
            ],
        )
    }

    pub fn chain_not_found() -> Self {
        Self::new(
            ChainErrorKind::ChainNotFound,
            [
                "No chain was provided to the request.",
                "Please provide a chain with the `chain` argument on the Action, or by supplying a `chain` to WalletClient.",
            ]
            .join("\n"),
            Vec::new(),
        )
    }

    pub fn invalid_chain_id(chain_id: impl fmt::Display) -> Self {
        Self::new(
            ChainErrorKind::InvalidChainId,
            format!("Chain ID \"{}\" is invalid.", chain_id),
            Vec::new(),
        )
    }

    /// Attach the error that led to this one.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ChainErrorKind {
        self.kind
    }

    pub fn short_message(&self) -> &str {
        &self.short_message
    }

    pub fn meta_messages(&self) -> &[String] {
        &self.meta_messages
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
