use serde::{Deserialize, Serialize};
use serde_json::Value;

use typoscope_core::{Result, SpellCheckError};

/// A JSON-RPC 2.0 request, newline-delimited on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Unwrap the result, turning a wire-level error into an engine error.
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(SpellCheckError::Engine(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}
