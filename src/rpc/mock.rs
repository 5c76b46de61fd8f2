//! A mock node RPC backend for testing. Returns canned per-method results
//! populated via the builder pattern and records every call so tests can
//! assert the exact method/param sequence that went over the wire.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Error;

use super::NodeRpc;

pub struct MockRpc {
    responses: Mutex<HashMap<String, VecDeque<Result<serde_json::Value, Error>>>>,
    calls: Mutex<Vec<(String, Vec<serde_json::Value>)>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            responses: HashMap::new(),
        }
    }

    /// Every `(method, params)` pair received so far, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<serde_json::Value>)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

pub struct MockRpcBuilder {
    responses: HashMap<String, VecDeque<Result<serde_json::Value, Error>>>,
}

impl MockRpcBuilder {
    /// Queue a successful `result` for `method`. Repeated queues for the
    /// same method are consumed in order.
    pub fn with_result(mut self, method: &str, result: serde_json::Value) -> Self {
        self.responses
            .entry(method.to_owned())
            .or_default()
            .push_back(Ok(result));
        self
    }

    /// Queue a failure for `method`.
    pub fn with_error(mut self, method: &str, error: Error) -> Self {
        self.responses
            .entry(method.to_owned())
            .or_default()
            .push_back(Err(error));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            responses: Mutex::new(self.responses),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));
        self.responses
            .lock()
            .expect("mock responses poisoned")
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(Error::Response {
                    code: -32601,
                    message: format!("Method not found: {method}"),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_results_are_consumed_in_order() {
        let rpc = MockRpc::builder()
            .with_result("getblockcount", serde_json::json!(1))
            .with_result("getblockcount", serde_json::json!(2))
            .build();
        assert_eq!(
            rpc.call("getblockcount", Vec::new()).await.unwrap(),
            serde_json::json!(1)
        );
        assert_eq!(
            rpc.call("getblockcount", Vec::new()).await.unwrap(),
            serde_json::json!(2)
        );
    }

    #[tokio::test]
    async fn unqueued_methods_answer_method_not_found() {
        let rpc = MockRpc::builder().build();
        let err = rpc.call("getbalance", Vec::new()).await.unwrap_err();
        assert!(matches!(err, Error::Response { code: -32601, .. }));
        assert_eq!(rpc.calls().len(), 1);
    }
}
