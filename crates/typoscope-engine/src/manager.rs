use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{info, warn};

use typoscope_core::config::EngineSettings;
use typoscope_core::{Result, SpellCheckError};

use crate::client::EngineClient;

/// Manages the engine sidecar process lifecycle. The stdio pipes go to the
/// [`EngineClient`] returned by [`start`](Self::start); the child handle
/// stays here so the process can be stopped.
pub struct EngineManager {
    command: String,
    args: Vec<String>,
    process: Option<Child>,
}

impl EngineManager {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            command: settings.command.clone(),
            args: settings.args.clone(),
            process: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.process.is_some()
    }

    /// Spawn the engine process and hand its pipes to a client. Errors when
    /// the process is already running or cannot be spawned.
    pub fn start(&mut self) -> Result<EngineClient> {
        if self.is_running() {
            return Err(SpellCheckError::Engine(
                "engine process already running".to_string(),
            ));
        }

        info!("starting spell-check engine: {} {:?}", self.command, self.args);

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SpellCheckError::Engine(format!("failed to start engine '{}': {e}", self.command))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SpellCheckError::Engine("failed to capture engine stdin".to_string()))?;
        let stdout = child.stdout.take().ok_or_else(|| {
            SpellCheckError::Engine("failed to capture engine stdout".to_string())
        })?;

        self.process = Some(child);
        Ok(EngineClient::new(stdin, stdout))
    }

    pub async fn stop(&mut self) {
        if let Some(mut process) = self.process.take() {
            info!("stopping spell-check engine");
            let _ = process.kill().await;
        }
    }

    /// Whether `command` can be launched at all.
    pub async fn probe(command: &str) -> bool {
        Command::new(command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Drop for EngineManager {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            warn!("engine process dropped without explicit stop");
            let _ = process.start_kill();
        }
    }
}
