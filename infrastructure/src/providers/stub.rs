//! Local stub backend: no network, deterministic echo.

use maire_domain::{AgentId, truncate};
use std::time::Duration;

/// Bytes of the prompt echoed back by the stub.
pub const STUB_ECHO_BYTES: usize = 120;

#[derive(Debug, Clone)]
pub struct StubBackend {
    latency: Duration,
}

impl StubBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Stub answer without the simulated latency.
    pub fn render(agent: &AgentId, prompt: &str) -> String {
        format!(
            "[{} - local stub]\n{}",
            agent,
            truncate(prompt, STUB_ECHO_BYTES)
        )
    }

    /// Wait the configured latency, then answer.
    pub async fn answer(&self, agent: &AgentId, prompt: &str) -> String {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Self::render(agent, prompt)
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(180))
    }
}
