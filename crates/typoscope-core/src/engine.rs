//! Contract with the external spell-check engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::check::CheckRequest;
use crate::error::Result;

/// Raw issue record as the engine reports it. All offsets are relative to
/// the substring that was sent for checking, in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineIssue {
    /// The misspelled token.
    pub text: String,
    /// Token length in characters.
    pub length: usize,
    /// Offset of the token within the checked content.
    pub offset: usize,
    /// Correction candidates, best first. May be empty.
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub line: EngineLine,
}

/// The line containing an engine issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineLine {
    /// Full text of the line.
    pub text: String,
    /// Offset of the start of the line within the checked content.
    pub offset: usize,
    pub position: EnginePosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnginePosition {
    /// Zero-indexed line number within the checked content.
    pub line: usize,
}

/// The out-of-process spell checker. `typoscope-engine` implements this over
/// a JSON-RPC sidecar process; tests substitute mock engines.
#[async_trait]
pub trait SpellEngine: Send + Sync {
    /// Check the request content, honoring its exception word lists.
    async fn check(&self, request: &CheckRequest) -> Result<Vec<EngineIssue>>;
}
