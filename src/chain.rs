//! Chain descriptors and the checks that raise chain errors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chain_error::ChainError;

/// Largest chain id accepted (EIP-2294)
pub const MAX_CHAIN_ID: u64 = 9_223_372_036_854_775_771;

/// A contract deployment known for a chain
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainContract {
    pub address: Option<String>,
    /// First block at which the contract exists
    pub block_created: Option<u64>,
}

impl ChainContract {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            block_created: None,
        }
    }

    pub fn deployed_at(block_created: u64) -> Self {
        Self {
            address: None,
            block_created: Some(block_created),
        }
    }

    pub fn with_block_created(mut self, block_created: u64) -> Self {
        self.block_created = Some(block_created);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub contracts: HashMap<String, ChainContract>,
}

impl Chain {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contracts: HashMap::new(),
        }
    }

    pub fn with_contract(mut self, name: impl Into<String>, contract: ChainContract) -> Self {
        self.contracts.insert(name.into(), contract);
        self
    }

    pub fn contract(&self, name: &str) -> Option<&ChainContract> {
        self.contracts.get(name)
    }

    /// Look up a contract that must be usable at `block_number`.
    pub fn contract_at(
        &self,
        name: &str,
        block_number: Option<u64>,
    ) -> Result<&ChainContract, ChainError> {
        let contract = self.contract(name);

        match contract {
            Some(c) if c.address.is_some() => {
                if let (Some(block), Some(created)) = (block_number, c.block_created) {
                    if created > block {
                        return Err(ChainError::contract_not_supported(
                            self, name, contract, block_number,
                        ));
                    }
                }
                Ok(c)
            }
            _ => Err(ChainError::contract_not_supported(
                self, name, contract, block_number,
            )),
        }
    }

    /// Address of a contract that must be usable at `block_number`.
    pub fn contract_address(
        &self,
        name: &str,
        block_number: Option<u64>,
    ) -> Result<&str, ChainError> {
        let contract = self.contract_at(name, block_number)?;
        contract
            .address
            .as_deref()
            .ok_or_else(|| ChainError::contract_not_supported(self, name, Some(contract), block_number))
    }
}

/// Ensure a chain was supplied and matches the chain the caller is connected to.
pub fn assert_current_chain(chain: Option<&Chain>, current_chain_id: u64) -> Result<(), ChainError> {
    let chain = chain.ok_or_else(ChainError::chain_not_found)?;
    if chain.id != current_chain_id {
        return Err(ChainError::chain_mismatch(chain, current_chain_id));
    }
    Ok(())
}

/// Validate a chain id received from outside (config, CLI, a wallet).
pub fn validate_chain_id(chain_id: i64) -> Result<u64, ChainError> {
    match u64::try_from(chain_id) {
        Ok(id) if id > 0 && id <= MAX_CHAIN_ID => Ok(id),
        _ => Err(ChainError::invalid_chain_id(chain_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain_error::ChainErrorKind;

    const MULTICALL3: &str = "0xcA11bde05977b3631167028862bE2a173976CA11";

    fn mainnet() -> Chain {
        Chain::new(1, "Ethereum").with_contract(
            "multicall3",
            ChainContract::new(MULTICALL3).with_block_created(14_353_601),
        )
    }

    #[test]
    fn test_contract_address_available() {
        let chain = mainnet();
        assert_eq!(chain.contract_address("multicall3", None).unwrap(), MULTICALL3);
        assert_eq!(
            chain.contract_address("multicall3", Some(14_353_601)).unwrap(),
            MULTICALL3
        );
    }

    #[test]
    fn test_contract_not_yet_deployed() {
        let err = mainnet()
            .contract_address("multicall3", Some(14_000_000))
            .unwrap_err();

        assert_eq!(err.kind(), ChainErrorKind::ContractNotSupported);
        assert_eq!(
            err.meta_messages()[1],
            "- The contract \"multicall3\" was not deployed until block 14353601 (current block 14000000)."
        );
    }

    #[test]
    fn test_contract_not_configured() {
        let err = mainnet().contract_address("ensRegistry", None).unwrap_err();

        assert_eq!(err.kind(), ChainErrorKind::ContractNotSupported);
        assert_eq!(
            err.short_message(),
            "Chain \"Ethereum\" does not support contract \"ensRegistry\"."
        );
    }

    #[test]
    fn test_assert_current_chain() {
        let chain = Chain::new(5, "Goerli");

        assert!(assert_current_chain(Some(&chain), 5).is_ok());
        assert_eq!(
            assert_current_chain(Some(&chain), 1).unwrap_err().kind(),
            ChainErrorKind::ChainMismatch
        );
        assert_eq!(
            assert_current_chain(None, 1).unwrap_err().kind(),
            ChainErrorKind::ChainNotFound
        );
    }

    #[test]
    fn test_validate_chain_id() {
        assert_eq!(validate_chain_id(1).unwrap(), 1);
        assert_eq!(validate_chain_id(31337).unwrap(), 31337);
        assert_eq!(validate_chain_id(MAX_CHAIN_ID as i64).unwrap(), MAX_CHAIN_ID);

        for bad in [0, -1, MAX_CHAIN_ID as i64 + 1] {
            let err = validate_chain_id(bad).unwrap_err();
            assert_eq!(err.kind(), ChainErrorKind::InvalidChainId);
            assert_eq!(err.short_message(), format!("Chain ID \"{}\" is invalid.", bad));
        }
    }

    #[test]
    fn test_chain_deserialize() {
        let chain: Chain = serde_json::from_str(
            r#"{"id":1,"name":"Ethereum","contracts":{"multicall3":{"address":"0xcA11bde05977b3631167028862bE2a173976CA11","blockCreated":14353601}}}"#,
        )
        .unwrap();
        assert_eq!(chain, mainnet());
    }
}
