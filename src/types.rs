//! Ethereum parameter types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::hex::number_to_hex;

/// Errors raised while building action parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Address \"{0}\" is invalid")]
    InvalidAddress(String),

    #[error("Block tag \"{0}\" is invalid")]
    InvalidBlockTag(String),

    #[error("Cannot specify both a block number ({number}) and a block tag (\"{tag}\")")]
    ConflictingBlockSelector { number: u64, tag: BlockTag },
}

/// 20-byte account address, kept in the form it was given
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s
            .strip_prefix("0x")
            .map(|body| body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit()))
            .unwrap_or(false);

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ParamsError::InvalidAddress(s.to_string()))
        }
    }
}

impl TryFrom<String> for Address {
    type Error = ParamsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbolic block reference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    #[default]
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        }
    }
}

impl FromStr for BlockTag {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(BlockTag::Latest),
            "earliest" => Ok(BlockTag::Earliest),
            "pending" => Ok(BlockTag::Pending),
            "safe" => Ok(BlockTag::Safe),
            "finalized" => Ok(BlockTag::Finalized),
            other => Err(ParamsError::InvalidBlockTag(other.to_string())),
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which block a state query runs against: an exact height or a tag, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSelector {
    Number(u64),
    Tag(BlockTag),
}

impl Default for BlockSelector {
    fn default() -> Self {
        BlockSelector::Tag(BlockTag::Latest)
    }
}

impl BlockSelector {
    /// Build a selector from two optional inputs, as received from an outside caller.
    ///
    /// Neither set yields the default (`latest`); both set is rejected.
    pub fn from_parts(
        block_number: Option<u64>,
        block_tag: Option<BlockTag>,
    ) -> Result<Self, ParamsError> {
        match (block_number, block_tag) {
            (Some(number), Some(tag)) => {
                Err(ParamsError::ConflictingBlockSelector { number, tag })
            }
            (Some(number), None) => Ok(BlockSelector::Number(number)),
            (None, Some(tag)) => Ok(BlockSelector::Tag(tag)),
            (None, None) => Ok(BlockSelector::default()),
        }
    }

    /// Wire form: hex quantity for a number, the literal tag otherwise
    pub fn to_rpc_param(&self) -> String {
        match self {
            BlockSelector::Number(number) => number_to_hex(*number),
            BlockSelector::Tag(tag) => tag.as_str().to_string(),
        }
    }

    pub fn block_number(&self) -> Option<u64> {
        match self {
            BlockSelector::Number(number) => Some(*number),
            BlockSelector::Tag(_) => None,
        }
    }
}

impl From<u64> for BlockSelector {
    fn from(number: u64) -> Self {
        BlockSelector::Number(number)
    }
}

impl From<BlockTag> for BlockSelector {
    fn from(tag: BlockTag) -> Self {
        BlockSelector::Tag(tag)
    }
}
