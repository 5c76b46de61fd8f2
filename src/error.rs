//! Error taxonomy shared by the transport and both adapters.
//!
//! Every public operation either returns a normalized value or fails with
//! exactly one of these kinds. Nothing is recovered internally; the host
//! applies its own retry policy, uniformly, across the transport kinds
//! ([`Error::Response`] / [`Error::Client`] / [`Error::Connection`]). The
//! remaining kinds indicate caller or data-model mistakes and are not
//! retryable.
//!
//! All variants own plain data so errors stay `Clone + PartialEq`;
//! underlying transport failures are captured as their display string.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node executed the call and rejected it with a structured
    /// JSON-RPC error (bad method, bad params, node-internal rejection).
    #[error("{message} ({code})")]
    Response { code: i64, message: String },

    /// The HTTP layer answered with a non-2xx status. Classified on status
    /// alone, before the body is inspected, so a proxy 404 carrying a
    /// JSON-RPC error body still lands here.
    #[error("unexpected HTTP status {status}: {body}")]
    Client { status: u16, body: String },

    /// The request never completed: DNS, TCP, TLS, or timeout failure.
    #[error("connection failure: {0}")]
    Connection(String),

    /// The configured server URI cannot be used as a JSON-RPC endpoint.
    #[error("invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),

    /// A 2xx response whose body is not a decodable JSON-RPC envelope, or
    /// a `result` whose shape does not match the called method.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// A required configuration key was absent at `configure` time.
    #[error("missing configuration setting: {0}")]
    MissingSetting(String),

    /// The address is not present in any balance grouping the node tracks.
    /// Distinct from a tracked address whose balance is zero.
    #[error("address {0} is not tracked in any balance grouping")]
    UnavailableAddressBalance(String),
}
