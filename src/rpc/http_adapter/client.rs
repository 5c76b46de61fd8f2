use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::Error;
use crate::rpc::NodeRpc;

use super::connection::parse_endpoint;
use super::protocol::{interpret_response, JsonRpcRequest};

/// Total round-trip timeout applied when none is given. The upstream node
/// may legitimately be slow under load; hosts with stricter budgets use
/// [`HttpClient::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON-RPC 1.0 client over HTTP(S).
///
/// Credentials embedded in the endpoint URI's authority are extracted at
/// construction and sent as HTTP Basic auth. The client holds no mutable
/// request-scoped state: one instance serves any number of sequential or
/// concurrent calls. No retries, no caching; every call is one
/// request/response exchange.
pub struct HttpClient {
    client: reqwest::Client,
    url: reqwest::Url,
    auth: Option<(String, String)>,
}

impl HttpClient {
    /// Create a client for `server` with the default timeout.
    ///
    /// `server` must be an `http://` or `https://` URI, optionally with
    /// embedded `user:pass` credentials.
    pub fn new(server: &str) -> Result<Self, Error> {
        Self::with_timeout(server, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit total round-trip timeout.
    pub fn with_timeout(server: &str, timeout: Duration) -> Result<Self, Error> {
        let (url, auth) = parse_endpoint(server)?;
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(Self { client, url, auth })
    }
}

#[async_trait]
impl NodeRpc for HttpClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, Error> {
        debug!(rpc.method = method, rpc.params = params.len(), "rpc call");
        let req = JsonRpcRequest {
            jsonrpc: "1.0",
            method,
            params,
        };

        let mut builder = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req);
        if let Some((ref user, ref pass)) = self.auth {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        interpret_response(status, &body)
    }
}
