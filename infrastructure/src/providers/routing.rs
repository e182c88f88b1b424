//! Agent-to-backend routing
//!
//! [`BackendInvoker`] implements the application's [`AgentInvoker`] port.
//! Routes are resolved once, when the invoker is built; every call is a map
//! lookup followed by one adapter call.
//!
//! Outcome of an invocation:
//!  1. agent bound to a configured remote backend that answers → `Succeeded`
//!  2. agent bound to the stub, not in the table, or missing a credential → `FellBack`
//!  3. remote backend tried and failed → `Failed`, stub text returned

use super::gemini::GeminiAdapter;
use super::huggingface::HuggingFaceAdapter;
use super::openrouter::OpenRouterAdapter;
use super::stub::StubBackend;
use super::{BackendAdapter, BackendError};
use crate::config::FileConfig;
use async_trait::async_trait;
use maire_application::ports::agent_invoker::{AgentAvailability, AgentInvoker, Invocation};
use maire_domain::{AgentId, Backend};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Where one agent's calls go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub backend: Backend,
    pub model: Option<String>,
}

impl Route {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

pub struct BackendInvoker {
    adapters: HashMap<Backend, Arc<dyn BackendAdapter>>,
    routes: BTreeMap<AgentId, Route>,
    stub: StubBackend,
}

impl BackendInvoker {
    pub fn new(
        adapters: Vec<Arc<dyn BackendAdapter>>,
        routes: BTreeMap<AgentId, Route>,
        stub: StubBackend,
    ) -> Self {
        let adapters = adapters
            .into_iter()
            .map(|adapter| (adapter.backend(), adapter))
            .collect();
        Self {
            adapters,
            routes,
            stub,
        }
    }

    /// Build adapters and routes from a validated configuration.
    pub fn from_config(config: &FileConfig) -> Result<Self, BackendError> {
        let adapters: Vec<Arc<dyn BackendAdapter>> = vec![
            Arc::new(OpenRouterAdapter::from_config(&config.backends.openrouter)?),
            Arc::new(HuggingFaceAdapter::from_config(&config.backends.huggingface)?),
            Arc::new(GeminiAdapter::from_config(&config.backends.gemini)?),
        ];

        let mut routes = BTreeMap::new();
        for (id, agent) in &config.agents {
            let Ok(id) = AgentId::new(id.as_str()) else {
                warn!("Skipping invalid agent id {:?}", id);
                continue;
            };
            let route = Route {
                backend: agent.backend,
                model: agent.model.clone(),
            };
            routes.insert(id, route);
        }

        let stub = StubBackend::new(Duration::from_millis(config.stub.latency_ms));
        Ok(Self::new(adapters, routes, stub))
    }

    /// Backend an agent resolves to. Unlisted agents go to the stub.
    pub fn backend_for(&self, agent: &AgentId) -> Backend {
        self.routes
            .get(agent)
            .map(|r| r.backend)
            .unwrap_or(Backend::Stub)
    }

    fn configured_adapter(&self, backend: Backend) -> Option<&Arc<dyn BackendAdapter>> {
        self.adapters.get(&backend).filter(|a| a.is_configured())
    }
}

#[async_trait]
impl AgentInvoker for BackendInvoker {
    async fn invoke(&self, agent: &AgentId, prompt: &str) -> Invocation {
        let Some(route) = self.routes.get(agent) else {
            debug!("Agent {} has no route, using stub", agent);
            return Invocation::fell_back(self.stub.answer(agent, prompt).await);
        };

        let Some(adapter) = self.configured_adapter(route.backend) else {
            debug!("Backend {} unavailable for {}, using stub", route.backend, agent);
            return Invocation::fell_back(self.stub.answer(agent, prompt).await);
        };

        match adapter.complete(route.model.as_deref(), prompt).await {
            Ok(text) => Invocation::succeeded(text),
            Err(e) => {
                warn!("Backend {} failed for {}: {}", route.backend, agent, e);
                Invocation::failed(StubBackend::render(agent, prompt))
            }
        }
    }

    fn available_agents(&self) -> Vec<AgentAvailability> {
        self.routes
            .iter()
            .map(|(id, route)| AgentAvailability {
                id: id.clone(),
                backend: route.backend,
                available: !route.backend.is_remote()
                    || self.configured_adapter(route.backend).is_some(),
            })
            .collect()
    }
}
