//! Native JSON-RPC client for Bitcoin-family node endpoints.
//!
//! Implements [`crate::rpc::NodeRpc`] over JSON-RPC 1.0 using `reqwest`,
//! with HTTP(S) transport and basic auth extracted from the endpoint URI.

mod client;
mod connection;
mod protocol;

pub use client::HttpClient;
