use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{ChildStdin, ChildStdout};
use tokio::sync::Mutex;
use tracing::debug;

use typoscope_core::{CheckRequest, EngineIssue, Result, SpellCheckError, SpellEngine};

use crate::protocol::{JsonRpcRequest, JsonRpcResponse};

/// JSON-RPC client over the engine process's stdio. One request/response
/// pair per call; the stdout lock keeps responses paired with their
/// requests.
pub struct EngineClient {
    stdin: Mutex<ChildStdin>,
    stdout: Mutex<BufReader<ChildStdout>>,
    next_id: AtomicU64,
}

impl EngineClient {
    pub(crate) fn new(stdin: ChildStdin, stdout: ChildStdout) -> Self {
        Self {
            stdin: Mutex::new(stdin),
            stdout: Mutex::new(BufReader::new(stdout)),
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest::new(id, method, params);

        let mut request_line = serde_json::to_string(&request)?;
        request_line.push('\n');

        {
            let mut stdin = self.stdin.lock().await;
            stdin
                .write_all(request_line.as_bytes())
                .await
                .map_err(|e| SpellCheckError::Engine(format!("write error: {e}")))?;
            stdin
                .flush()
                .await
                .map_err(|e| SpellCheckError::Engine(format!("flush error: {e}")))?;
        }

        let mut line = String::new();
        {
            let mut stdout = self.stdout.lock().await;
            let read = stdout
                .read_line(&mut line)
                .await
                .map_err(|e| SpellCheckError::Engine(format!("read error: {e}")))?;
            if read == 0 {
                return Err(SpellCheckError::Engine("engine closed its stdout".to_string()));
            }
        }

        let response: JsonRpcResponse = serde_json::from_str(&line)
            .map_err(|e| SpellCheckError::MalformedResponse(e.to_string()))?;
        response.into_result()
    }

    /// One-time handshake; the engine loads its dictionaries here.
    pub async fn init(&self) -> Result<()> {
        self.call("init", None).await?;
        debug!("spell-check engine initialized");
        Ok(())
    }

    /// Run one check. The engine honors the request's exception word lists.
    pub async fn check_spelling(&self, request: &CheckRequest) -> Result<Vec<EngineIssue>> {
        let params = serde_json::to_value(request)?;
        let value = self.call("checkSpelling", Some(params)).await?;
        serde_json::from_value(value)
            .map_err(|e| SpellCheckError::MalformedResponse(e.to_string()))
    }

    pub async fn health_check(&self) -> bool {
        self.call("ping", None).await.is_ok()
    }
}

#[async_trait]
impl SpellEngine for EngineClient {
    async fn check(&self, request: &CheckRequest) -> Result<Vec<EngineIssue>> {
        self.check_spelling(request).await
    }
}
