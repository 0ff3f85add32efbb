//! The request capability actions are dispatched through

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::RpcError;

/// Submit a JSON-RPC method with positional params and return the raw result.
///
/// Implementations own connection handling, timeouts and retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        (**self).request(method, params).await
    }
}

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Result(Value),
    Error { code: i64, message: String },
}

/// In-memory transport with canned replies per method
///
/// Methods without a reply fail with JSON-RPC error `-32601`.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, MockReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(self, method: &str, result: impl Into<Value>) -> Self {
        self.lock_replies()
            .insert(method.to_string(), MockReply::Result(result.into()));
        self
    }

    pub fn with_error(self, method: &str, code: i64, message: &str) -> Self {
        self.lock_replies().insert(
            method.to_string(),
            MockReply::Error {
                code,
                message: message.to_string(),
            },
        );
        self
    }

    /// Every request received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockReply>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                method: method.to_string(),
                params,
            });

        let reply = self.lock_replies().get(method).cloned();
        match reply {
            Some(MockReply::Result(value)) => Ok(value),
            Some(MockReply::Error { code, message }) => {
                Err(RpcError::JsonRpcError { code, message })
            }
            None => Err(RpcError::JsonRpcError {
                code: -32601,
                message: format!("the method {} does not exist/is not available", method),
            }),
        }
    }
}
