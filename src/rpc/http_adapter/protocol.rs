use reqwest::StatusCode;

use crate::error::Error;

/// JSON-RPC 1.0 style request body, exactly as Core-family nodes expect
/// it: no `id`, fixed `"jsonrpc": "1.0"` tag, positional params.
#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) method: &'a str,
    pub(super) params: Vec<serde_json::Value>,
}

#[derive(serde::Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Classify an HTTP status/body pair into the decoded `result` or an
/// error.
///
/// Classification order is load-bearing: a non-2xx status is a
/// [`Error::Client`] even when the body happens to contain a well-formed
/// JSON-RPC error envelope.
pub(super) fn interpret_response(status: StatusCode, body: &str) -> Result<serde_json::Value, Error> {
    if !status.is_success() {
        return Err(Error::Client {
            status: status.as_u16(),
            body: body.to_owned(),
        });
    }

    let decoded: JsonRpcResponse = serde_json::from_str(body).map_err(|e| {
        Error::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
    })?;

    if let Some(err) = decoded.error {
        if !err.is_null() {
            return Err(interpret_node_error(err));
        }
    }

    Ok(decoded.result.unwrap_or(serde_json::Value::Null))
}

/// Parse a non-null JSON-RPC `error` value into [`Error::Response`].
///
/// The envelope is `{"code": <int>, "message": <string>}`; anything else
/// falls back to [`Error::InvalidResponse`] with the raw JSON.
fn interpret_node_error(err: serde_json::Value) -> Error {
    #[derive(serde::Deserialize)]
    struct NodeError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<NodeError>(err.clone()) {
        Ok(parsed) => Error::Response {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => Error::InvalidResponse(format!("non-standard JSON-RPC error: {err}")),
    }
}
