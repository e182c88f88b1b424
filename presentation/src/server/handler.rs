use crate::output::report::RunReport;
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use maire_application::{AgentAvailability, AgentInvoker, RunOrchestrationUseCase};
use maire_domain::OrchestrationRequest;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Add the ledger entries to the response
    pub include_ledger: bool,
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Run one orchestration request.
pub async fn run_handler<I: AgentInvoker + 'static>(
    State(use_case): State<Arc<RunOrchestrationUseCase<I>>>,
    query: Result<Query<RunParams>, QueryRejection>,
    body: Result<Json<OrchestrationRequest>, JsonRejection>,
) -> Result<Json<RunReport>, ApiError> {
    let Query(params) = query?;
    let Json(request) = body?;
    let result = use_case.execute(request).await?;
    Ok(Json(RunReport::new(result, params.include_ledger)))
}

/// Configured agents and their availability.
pub async fn agents_handler<I: AgentInvoker + 'static>(
    State(use_case): State<Arc<RunOrchestrationUseCase<I>>>,
) -> Json<Vec<AgentAvailability>> {
    Json(use_case.invoker().available_agents())
}
