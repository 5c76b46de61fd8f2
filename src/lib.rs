//! JSON-RPC adapter for UTXO-style nodes.
//!
//! Lets a ledger-processing host observe and operate a Bitcoin-family node
//! through three layers:
//!
//! - [`rpc`] — the JSON-RPC transport ([`rpc::HttpClient`]) and the
//!   [`rpc::NodeRpc`] trait seam for substituting transports;
//! - [`blockchain`] — block fetching and normalization of on-chain outputs
//!   into currency-attributed [`types::Deposit`] records;
//! - [`wallet`] — receiving-address creation, outgoing payments, and
//!   spendable-balance queries.
//!
//! All amounts are carried as [`rust_decimal::Decimal`] and decoded from the
//! node's JSON with arbitrary precision, so values like `134.22200000`
//! survive byte-for-byte.
//!
//! The host owns registration and lifecycle: this crate only exposes
//! constructors plus the version constants below for the host's load-time
//! compatibility check.

pub mod blockchain;
pub mod error;
pub mod rpc;
pub mod types;
pub mod wallet;


pub use blockchain::{Blockchain, Features};
pub use error::Error;
pub use wallet::Wallet;

/// Crate version, for host-side diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the chain-adapter interface this crate implements. Hosts
/// compare this against their required interface version before wiring the
/// adapter into their registry.
pub const BLOCKCHAIN_INTERFACE_VERSION: &str = "1.0.0";

/// Version of the wallet-adapter interface this crate implements.
pub const WALLET_INTERFACE_VERSION: &str = "1.0.0";
