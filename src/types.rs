//! Shared domain model: adapter settings, currencies, the raw node shapes,
//! and the normalized records handed back to the host.
//!
//! Settings structs are plain serde targets. Unknown top-level keys are
//! dropped during deserialization (serde's default), which doubles as the
//! configuration allow-list; forward-compatible extras travel in the
//! explicit `options` bags instead of arbitrary top-level keys.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ==============================================================================
// Configuration
// ==============================================================================

/// One asset riding on the connected ledger. Several currencies may share a
/// single node connection (multi-asset forks of the same chain); the chain
/// adapter uses them purely as a fan-out key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    pub id: String,
    /// Smallest-unit divisor (e.g. `100_000_000` for 8 decimal places).
    /// Informational metadata for the host; on-chain amounts already arrive
    /// in the node's native decimal unit and are never rescaled here.
    #[serde(default = "default_base_factor")]
    pub base_factor: u64,
    /// Escape hatch for host-specific per-currency extras.
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

fn default_base_factor() -> u64 {
    1
}

/// Chain adapter settings. Both fields are optional: a host may configure
/// only `currencies` (to use normalization offline) or only `server`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockchainSettings {
    /// Endpoint URI, optionally with embedded `user:pass` credentials.
    #[serde(default)]
    pub server: Option<String>,
    /// Fan-out list, in configuration order.
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

/// Wallet adapter settings. `configure` requires both sections to be
/// present and fails with [`Error::MissingSetting`] otherwise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WalletSettings {
    #[serde(default)]
    pub wallet: Option<WalletConnection>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletConnection {
    /// Node endpoint URI, optionally with embedded credentials.
    pub uri: String,
    /// Optional context: the wallet's own deposit/hot address.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

// ==============================================================================
// Raw node shapes
// ==============================================================================

/// `getblock <hash> 2` result: a block with embedded transaction detail.
/// Only the fields the normalization path reads are decoded; everything
/// else in the node's response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    pub tx: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub txid: String,
    /// Absent for some coinbase encodings; an outputless transaction
    /// normalizes to nothing rather than erroring.
    #[serde(default)]
    pub vout: Vec<RawVout>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVout {
    /// Output value in the node's native decimal unit, decoded losslessly.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
    /// Output index within the transaction.
    pub n: u32,
    #[serde(rename = "scriptPubKey", default)]
    pub script_pub_key: RawScriptPubKey,
}

/// Script payload of an output, reduced to the node-decoded destination
/// addresses. Older Core-family nodes report a plural `addresses` array,
/// newer ones a singular `address`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScriptPubKey {
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
    #[serde(default)]
    pub address: Option<String>,
}

impl RawScriptPubKey {
    /// Destination addresses this script resolves to. Empty for outputs
    /// with no address-bearing script (e.g. data carriers), which the
    /// normalization path skips entirely.
    pub fn resolved_addresses(&self) -> &[String] {
        match &self.addresses {
            Some(addresses) if !addresses.is_empty() => addresses,
            _ => self
                .address
                .as_ref()
                .map(std::slice::from_ref)
                .unwrap_or(&[]),
        }
    }
}

// ==============================================================================
// Normalized records
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
}

/// One normalized deposit record: a single on-chain output attributed to a
/// single configured currency and destination address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deposit {
    pub hash: String,
    /// Output index within the source transaction, preserved as-is.
    pub txout: u32,
    pub to_address: String,
    pub amount: Decimal,
    pub status: TxStatus,
    pub currency_id: String,
}

/// An outgoing payment. `hash` starts empty and is populated in place by
/// the wallet adapter once the node accepts the transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingTransaction {
    pub to_address: String,
    pub amount: Decimal,
    pub hash: Option<String>,
}

impl OutgoingTransaction {
    pub fn new(to_address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            to_address: to_address.into(),
            amount,
            hash: None,
        }
    }
}

/// `getnewaddress` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressInfo {
    pub address: String,
}

// ==============================================================================
// Decimal <-> JSON bridging
// ==============================================================================

/// Decode a JSON amount into an exact `Decimal`. Numbers keep their
/// original literal (arbitrary-precision serde_json), so trailing zeros
/// and full scale survive; strings are accepted for nodes that quote
/// amounts.
pub(crate) fn decimal_from_json(value: &serde_json::Value) -> Result<Decimal, Error> {
    let repr = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => {
            return Err(Error::InvalidResponse(format!(
                "expected numeric amount, got {other}"
            )))
        }
    };
    Decimal::from_str(&repr)
        .or_else(|_| Decimal::from_scientific(&repr))
        .map_err(|e| Error::InvalidResponse(format!("non-decimal amount `{repr}`: {e}")))
}

/// Encode a `Decimal` as a JSON number with its exact literal. Falls back
/// to a string if the literal cannot be represented as a JSON number;
/// Core-family nodes accept both for amount parameters.
pub(crate) fn decimal_to_json(amount: Decimal) -> serde_json::Value {
    let repr = amount.to_string();
    match serde_json::Number::from_str(&repr) {
        Ok(n) => serde_json::Value::Number(n),
        Err(_) => serde_json::Value::String(repr),
    }
}
