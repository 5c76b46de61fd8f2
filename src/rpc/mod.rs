//! Node RPC abstraction layer.
//!
//! Defines the [`NodeRpc`] trait and provides the HTTP JSON-RPC
//! implementation ([`HttpClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpClient;

use async_trait::async_trait;

use crate::error::Error;

/// A single JSON-RPC call against a UTXO node.
///
/// Implementations handle authentication and connection management
/// internally, hold no request-scoped mutable state, and classify every
/// failure into the crate's [`Error`] taxonomy. Both adapters talk to the
/// node exclusively through this seam, which is also how tests substitute
/// a canned transport.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Invoke `method` with positional `params` and return the decoded
    /// `result` value.
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error>;
}
