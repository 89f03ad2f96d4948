//! Engine sidecar integration: spawns the external spell-check process and
//! speaks line-delimited JSON-RPC 2.0 with it over stdio.

mod client;
mod manager;
mod protocol;

pub use client::EngineClient;
pub use manager::EngineManager;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
