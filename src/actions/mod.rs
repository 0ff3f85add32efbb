//! Typed actions: one JSON-RPC call each, with params built and results decoded

pub mod public;

use serde_json::Value;

use crate::error::{Result, RpcError};

/// Borrow the raw result of `method` as a hex quantity string
fn quantity<'a>(method: &str, raw: &'a Value) -> Result<&'a str> {
    raw.as_str().ok_or_else(|| {
        RpcError::InvalidResponse(format!("{} returned {} instead of a hex quantity", method, raw))
            .into()
    })
}
