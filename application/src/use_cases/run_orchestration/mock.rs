//! Test double for the agent invocation port.

use crate::ports::agent_invoker::{AgentAvailability, AgentInvoker, Invocation};
use async_trait::async_trait;
use maire_domain::{AgentId, Backend, Provenance};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One recorded call
#[derive(Debug, Clone)]
pub struct Call {
    pub agent: AgentId,
    pub prompt: String,
    pub response: String,
}

/// Invoker that answers `"<agent>#<seq>"`, where `seq` counts every call
/// made so far, and records each prompt it receives.
pub struct RecordingInvoker {
    seq: AtomicUsize,
    calls: Mutex<Vec<Call>>,
    delays: HashMap<String, Duration>,
    provenance: HashMap<String, Provenance>,
    panics: HashSet<String>,
}

impl RecordingInvoker {
    pub fn new() -> Self {
        Self {
            seq: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            delays: HashMap::new(),
            provenance: HashMap::new(),
            panics: HashSet::new(),
        }
    }

    /// Sleep before answering for `agent`
    pub fn with_delay(mut self, agent: &str, delay: Duration) -> Self {
        self.delays.insert(agent.to_string(), delay);
        self
    }

    /// Report `provenance` for every answer from `agent`
    pub fn with_provenance(mut self, agent: &str, provenance: Provenance) -> Self {
        self.provenance.insert(agent.to_string(), provenance);
        self
    }

    /// Panic instead of answering for `agent`
    pub fn with_panic(mut self, agent: &str) -> Self {
        self.panics.insert(agent.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentInvoker for RecordingInvoker {
    async fn invoke(&self, agent: &AgentId, prompt: &str) -> Invocation {
        if let Some(delay) = self.delays.get(agent.as_str()) {
            tokio::time::sleep(*delay).await;
        }
        if self.panics.contains(agent.as_str()) {
            panic!("backend adapter bug for {}", agent);
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        let response = format!("{}#{}", agent, seq);
        self.calls.lock().unwrap().push(Call {
            agent: agent.clone(),
            prompt: prompt.to_string(),
            response: response.clone(),
        });
        Invocation {
            provenance: self
                .provenance
                .get(agent.as_str())
                .copied()
                .unwrap_or(Provenance::Succeeded),
            text: response,
        }
    }

    fn available_agents(&self) -> Vec<AgentAvailability> {
        vec![AgentAvailability {
            id: AgentId::new("mock").unwrap(),
            backend: Backend::Stub,
            available: true,
        }]
    }
}
